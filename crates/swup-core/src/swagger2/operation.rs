use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::schema::{Items, SchemaRef};

/// An API operation.
///
/// `parameters` and `responses` are `Some` while a document is being built;
/// the builder's cleanup pass turns empty collections into `None` so they are
/// never written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
}

/// A non-body or body parameter, flattened the way 1.2 declares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub required: bool,

    #[serde(rename = "type")]
    pub param_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}
