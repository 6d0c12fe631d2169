//! The Swagger 1.2 → 2.0 descriptor mapper.

pub mod builder;
pub mod definitions;
pub mod operations;
pub mod tags;

use serde_json::Value;

use crate::error::ConvertError;
use crate::origin::SourceOrigin;
use crate::parse;
use crate::swagger12::{ApiDeclaration, ResourceListing};
use crate::swagger2::SwaggerDoc;

use builder::DocumentBuilder;
use definitions::convert_model;
use operations::build_operation;
use tags::tag_name;

/// Outcome of resolving one API reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(ApiDeclaration),
    /// The declaration could not be fetched or parsed. The reference still
    /// gets its tag but contributes no endpoints.
    Unavailable { reason: String },
}

/// Supplies API declarations by their relative reference path.
pub trait DeclarationResolver {
    fn resolve(&self, path: &str) -> Resolution;
}

impl<F> DeclarationResolver for F
where
    F: Fn(&str) -> Resolution,
{
    fn resolve(&self, path: &str) -> Resolution {
        self(path)
    }
}

/// A reference whose declaration was unavailable during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedReference {
    pub path: String,
    pub reason: String,
}

/// A converted document plus what had to be skipped along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: SwaggerDoc,
    pub skipped: Vec<SkippedReference>,
}

/// Parse a raw resource listing and convert it.
///
/// A listing without `info` or `apis` is a fatal error.
pub fn convert_value(
    root: Value,
    origin: &SourceOrigin,
    resolver: &impl DeclarationResolver,
) -> Result<Conversion, ConvertError> {
    let listing = parse::resource_listing_from_value(root)?;
    Ok(convert(&listing, origin, resolver))
}

/// Convert a resource listing, pulling each declaration from `resolver` in
/// listing order.
pub fn convert(
    listing: &ResourceListing,
    origin: &SourceOrigin,
    resolver: &impl DeclarationResolver,
) -> Conversion {
    let mut builder =
        DocumentBuilder::new(origin, &listing.info, listing.api_version.as_deref());
    let mut skipped = Vec::new();
    let mut declared_models = Vec::new();

    for reference in &listing.apis {
        let tag = tag_name(&reference.path);
        builder.add_tag(&tag, reference.description.as_deref());

        log::debug!("resolving declaration {}", reference.path);
        let declaration = match resolver.resolve(&reference.path) {
            Resolution::Resolved(declaration) => declaration,
            Resolution::Unavailable { reason } => {
                log::warn!("skipping {}: {reason}", reference.path);
                skipped.push(SkippedReference {
                    path: reference.path.clone(),
                    reason,
                });
                continue;
            }
        };

        for endpoint in &declaration.apis {
            for operation in &endpoint.operations {
                builder.insert_operation(
                    &endpoint.path,
                    &operation.method,
                    build_operation(operation, &tag),
                );
            }
        }
        declared_models.push(declaration.models);
    }

    let models = listing.models.iter().chain(declared_models.iter().flatten());
    for (name, model) in models {
        builder.insert_definition(name, convert_model(model));
    }

    let document = builder.finish();
    log::debug!(
        "converted {} tags, {} operations, {} definitions",
        document.tags.len(),
        document.operation_count(),
        document.definitions.len()
    );

    Conversion { document, skipped }
}
