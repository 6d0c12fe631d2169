use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::Operation;
use super::schema::Definition;

pub const SWAGGER_VERSION: &str = "2.0";

/// Tag definition, one per controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Top-level Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDoc {
    pub swagger: String,

    pub info: serde_json::Map<String, serde_json::Value>,

    pub host: String,

    #[serde(rename = "basePath")]
    pub base_path: String,

    pub schemes: Vec<String>,

    /// URL template → lower-cased HTTP method → operation.
    pub paths: IndexMap<String, IndexMap<String, Operation>>,

    pub definitions: IndexMap<String, Definition>,

    pub tags: Vec<Tag>,
}

impl SwaggerDoc {
    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }

    pub fn operation(&self, path: &str, method: &str) -> Option<&Operation> {
        self.paths.get(path).and_then(|methods| methods.get(method))
    }
}
