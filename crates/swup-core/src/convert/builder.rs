use std::collections::HashSet;

use indexmap::IndexMap;

use crate::origin::SourceOrigin;
use crate::swagger2::spec::SWAGGER_VERSION;
use crate::swagger2::{Definition, Operation, SwaggerDoc, Tag};

pub(crate) const DEFAULT_API_VERSION: &str = "1.0";

/// Accumulates one target document during a single conversion pass.
///
/// Owned by the conversion for its whole lifetime and consumed by
/// [`DocumentBuilder::finish`].
#[derive(Debug)]
pub struct DocumentBuilder {
    doc: SwaggerDoc,
    seen_tags: HashSet<String>,
}

impl DocumentBuilder {
    pub fn new(
        origin: &SourceOrigin,
        info: &serde_json::Map<String, serde_json::Value>,
        api_version: Option<&str>,
    ) -> Self {
        let mut info = info.clone();
        info.insert(
            "version".to_string(),
            serde_json::Value::String(api_version.unwrap_or(DEFAULT_API_VERSION).to_string()),
        );

        Self {
            doc: SwaggerDoc {
                swagger: SWAGGER_VERSION.to_string(),
                info,
                host: origin.host(),
                base_path: origin.base_path(),
                schemes: vec![origin.scheme().to_string()],
                paths: IndexMap::new(),
                definitions: IndexMap::new(),
                tags: Vec::new(),
            },
            seen_tags: HashSet::new(),
        }
    }

    /// Append a tag unless one with the same name was already added.
    /// Returns `true` if the tag was new.
    pub fn add_tag(&mut self, name: &str, description: Option<&str>) -> bool {
        if !self.seen_tags.insert(name.to_string()) {
            return false;
        }
        self.doc.tags.push(Tag {
            name: name.to_string(),
            description: description.map(String::from),
        });
        true
    }

    /// Insert an operation; a later (path, method) pair replaces the earlier one.
    pub fn insert_operation(&mut self, path: &str, method: &str, operation: Operation) {
        let replaced = self
            .doc
            .paths
            .entry(path.to_string())
            .or_default()
            .insert(method.to_lowercase(), operation);
        if replaced.is_some() {
            log::debug!(
                "{} {path} redeclared; keeping the later operation",
                method.to_uppercase()
            );
        }
    }

    pub fn insert_definition(&mut self, name: &str, definition: Definition) {
        self.doc.definitions.insert(name.to_string(), definition);
    }

    /// Run the cleanup pass and hand back the document.
    pub fn finish(mut self) -> SwaggerDoc {
        for operation in self.doc.paths.values_mut().flat_map(IndexMap::values_mut) {
            if operation.responses.as_ref().is_some_and(IndexMap::is_empty) {
                operation.responses = None;
            }
            if operation.parameters.as_ref().is_some_and(Vec::is_empty) {
                operation.parameters = None;
            }
        }
        self.doc
    }
}
