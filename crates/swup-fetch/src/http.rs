use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use swup_core::swagger12::ApiDeclaration;
use swup_core::{DeclarationResolver, Resolution, SourceOrigin, parse};

use crate::error::FetchError;
use crate::into_resolution;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the resource listing and its declarations over HTTP(S).
pub struct HttpSource {
    client: Client,
    origin: SourceOrigin,
}

impl HttpSource {
    pub fn new(origin: SourceOrigin, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|source| FetchError::Request {
                url: origin.as_str().to_string(),
                source,
            })?;

        Ok(Self { client, origin })
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    /// Fetch the root resource listing as raw JSON.
    pub fn fetch_listing(&self) -> Result<Value, FetchError> {
        self.get_json(self.origin.as_str())
    }

    pub fn fetch_declaration(&self, path: &str) -> Result<ApiDeclaration, FetchError> {
        let url = self.origin.declaration_url(path);
        let value = self.get_json(&url)?;
        parse::api_declaration_from_value(value).map_err(|source| FetchError::Parse {
            location: url,
            source,
        })
    }

    fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        log::debug!("GET {url}");
        let request_err = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(request_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(request_err)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Parse {
            location: url.to_string(),
            source: e.into(),
        })
    }
}

impl DeclarationResolver for HttpSource {
    fn resolve(&self, path: &str) -> Resolution {
        into_resolution(path, self.fetch_declaration(path))
    }
}
