use indexmap::IndexMap;

use crate::swagger12::{Model, ModelItems, ModelProperty};
use crate::swagger2::{Definition, Items, Property, SchemaRef};

use super::operations::DEFAULT_PARAM_TYPE;

const OBJECT_TYPE: &str = "object";

/// Convert a 1.2 model into a 2.0 definition.
pub fn convert_model(model: &Model) -> Definition {
    let mut properties = IndexMap::new();
    let mut required = Vec::new();

    for (name, prop) in &model.properties {
        let flagged = prop.required.unwrap_or(false) || model.required.contains(name);
        if flagged {
            required.push(name.clone());
        }
        properties.insert(name.clone(), convert_property(prop));
    }

    // Model-level names that don't match a declared property are still kept.
    for name in &model.required {
        if !required.contains(name) {
            required.push(name.clone());
        }
    }

    Definition {
        schema_type: OBJECT_TYPE.to_string(),
        properties,
        required: (!required.is_empty()).then_some(required),
        description: model.description.clone().unwrap_or_default(),
    }
}

fn convert_property(prop: &ModelProperty) -> Property {
    if let Some(target) = non_empty(prop.ref_name.as_deref()) {
        return Property::Ref(SchemaRef::definition(target));
    }

    Property::Inline {
        property_type: prop
            .property_type
            .as_deref()
            .unwrap_or(DEFAULT_PARAM_TYPE)
            .to_lowercase(),
        description: prop.description.clone().unwrap_or_default(),
        format: non_empty(prop.format.as_deref()).map(String::from),
        items: prop.items.as_ref().map(convert_items),
    }
}

pub(crate) fn convert_items(items: &ModelItems) -> Items {
    if let Some(target) = non_empty(items.ref_name.as_deref()) {
        return Items::Ref(SchemaRef::definition(target));
    }
    Items::Inline {
        item_type: items
            .item_type
            .as_deref()
            .unwrap_or(DEFAULT_PARAM_TYPE)
            .to_lowercase(),
        format: non_empty(items.format.as_deref()).map(String::from),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
