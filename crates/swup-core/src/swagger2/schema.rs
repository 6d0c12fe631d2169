use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A `{"$ref": "#/definitions/<name>"}` pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

impl SchemaRef {
    pub fn definition(name: &str) -> Self {
        Self {
            ref_path: format!("#/definitions/{name}"),
        }
    }
}

/// A model definition under `definitions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "type")]
    pub schema_type: String,

    pub properties: IndexMap<String, Property>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    pub description: String,
}

/// A definition property: either a reference to another definition or an
/// inline primitive/array type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Ref(SchemaRef),
    Inline {
        #[serde(rename = "type")]
        property_type: String,

        description: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        items: Option<Items>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Ref(SchemaRef),
    Inline {
        #[serde(rename = "type")]
        item_type: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },
}
