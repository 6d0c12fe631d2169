//! Document sources for swup: where the resource listing and its API
//! declarations come from.

pub mod directory;
pub mod error;
pub mod http;

pub use directory::DirectorySource;
pub use error::FetchError;
pub use http::HttpSource;

use swup_core::Resolution;
use swup_core::swagger12::ApiDeclaration;

/// Turn a declaration fetch into a resolver outcome; failures are logged and
/// become [`Resolution::Unavailable`].
pub(crate) fn into_resolution(
    path: &str,
    fetched: Result<ApiDeclaration, FetchError>,
) -> Resolution {
    match fetched {
        Ok(declaration) => Resolution::Resolved(declaration),
        Err(e) => {
            log::warn!("failed to fetch declaration {path}: {e}");
            Resolution::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}
