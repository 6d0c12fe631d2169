use url::Url;

use crate::error::OriginError;

/// Literal suffix every resource listing URL must carry.
pub const API_DOCS_SUFFIX: &str = "api-docs";

/// The URL a resource listing was fetched from.
///
/// `host`, `basePath` and `schemes` of the converted document all come from
/// here rather than from fields inside the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOrigin {
    url: Url,
    raw: String,
}

impl SourceOrigin {
    pub fn parse(raw: &str) -> Result<Self, OriginError> {
        let raw = raw.trim();
        if !raw.ends_with(API_DOCS_SUFFIX) {
            return Err(OriginError::NotApiDocs(raw.to_string()));
        }

        let url = Url::parse(raw).map_err(|source| OriginError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;
        if url.host_str().is_none() {
            return Err(OriginError::MissingHost(raw.to_string()));
        }

        Ok(Self {
            url,
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Host with an explicit port, if the URL had one.
    pub fn host(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// The URL path with its trailing `api-docs` segment removed. A last
    /// segment that merely ends in `api-docs` is kept whole.
    pub fn base_path(&self) -> String {
        let path = self.url.path().trim_end_matches('/');
        let parent = match path.rsplit_once('/') {
            Some((parent, API_DOCS_SUFFIX)) => parent,
            _ => path,
        };
        let trimmed = parent.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Absolute URL of the API declaration referenced by `path`.
    pub fn declaration_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.raw.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
