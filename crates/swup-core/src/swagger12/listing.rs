use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::model::Model;

/// Root document of a Swagger 1.2 description, usually served at `.../api-docs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceListing {
    #[serde(rename = "swaggerVersion", skip_serializing_if = "Option::is_none")]
    pub swagger_version: Option<String>,

    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Kept as an ordered JSON object so it can be forwarded verbatim.
    pub info: serde_json::Map<String, serde_json::Value>,

    pub apis: Vec<ApiReference>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub models: IndexMap<String, Model>,
}

/// A pointer from the listing to one controller's API declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiReference {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
