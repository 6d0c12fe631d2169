use std::fs;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use swup_core::swagger12::ApiDeclaration;
use swup_core::{DeclarationResolver, Resolution, parse};

use crate::error::FetchError;
use crate::into_resolution;

/// File name of the resource listing inside a local directory.
pub const LISTING_FILE_NAME: &str = "api-docs.json";

/// Reads previously saved documents from a directory.
///
/// The listing lives at `<dir>/api-docs.json`; the declaration referenced as
/// `/pet-controller` lives at `<dir>/pet-controller.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn listing_path(&self) -> PathBuf {
        self.root.join(LISTING_FILE_NAME)
    }

    /// File holding the declaration for `path`. Paths that would leave the
    /// root directory (`..`, absolute or drive-prefixed components) are refused.
    pub fn declaration_path(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = PathBuf::from(format!("{}.json", path.trim_matches('/')));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(FetchError::UnsafePath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }

    pub fn fetch_listing(&self) -> Result<Value, FetchError> {
        read_json(&self.listing_path())
    }

    pub fn fetch_declaration(&self, path: &str) -> Result<ApiDeclaration, FetchError> {
        let file = self.declaration_path(path)?;
        let value = read_json(&file)?;
        parse::api_declaration_from_value(value).map_err(|source| FetchError::Parse {
            location: file.display().to_string(),
            source,
        })
    }
}

impl DeclarationResolver for DirectorySource {
    fn resolve(&self, path: &str) -> Resolution {
        into_resolution(path, self.fetch_declaration(path))
    }
}

fn read_json(path: &Path) -> Result<Value, FetchError> {
    let content = fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| FetchError::Parse {
        location: path.display().to_string(),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_path() {
        let source = DirectorySource::new("/docs");
        assert_eq!(
            source.declaration_path("/pet-controller").unwrap(),
            PathBuf::from("/docs/pet-controller.json")
        );
        assert_eq!(
            source.declaration_path("/legacy/pet-controller").unwrap(),
            PathBuf::from("/docs/legacy/pet-controller.json")
        );
    }

    #[test]
    fn test_declaration_path_rejects_parent_dirs() {
        let source = DirectorySource::new("/docs");
        for path in ["/../../etc/x", "/pets/../../secret", "/a/../b"] {
            assert!(
                matches!(
                    source.declaration_path(path),
                    Err(FetchError::UnsafePath(p)) if p == path
                ),
                "{path} should be refused"
            );
        }
    }

    #[test]
    fn test_listing_path() {
        let source = DirectorySource::new("/docs");
        assert_eq!(source.listing_path(), PathBuf::from("/docs/api-docs.json"));
    }
}
