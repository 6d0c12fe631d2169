use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::model::{Model, ModelItems};

/// A per-controller Swagger 1.2 document listing endpoints and operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiDeclaration {
    #[serde(rename = "swaggerVersion", skip_serializing_if = "Option::is_none")]
    pub swagger_version: Option<String>,

    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(rename = "resourcePath", skip_serializing_if = "Option::is_none")]
    pub resource_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apis: Vec<Endpoint>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub models: IndexMap<String, Model>,
}

/// A literal URL template together with the operations declared on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub method: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    #[serde(
        rename = "responseMessages",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub response_messages: Vec<ResponseMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Where the parameter lives: `query`, `path`, `body`, `header` or `form`.
    #[serde(rename = "paramType")]
    pub param_type: String,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Element type when `type` is `array`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ModelItems>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "responseModel", skip_serializing_if = "Option::is_none")]
    pub response_model: Option<String>,
}
