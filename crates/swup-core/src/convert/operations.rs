use indexmap::IndexMap;

use crate::swagger12;
use crate::swagger2::{Operation, Parameter, Response, SchemaRef};

use super::definitions::convert_items;

pub(crate) const DEFAULT_PARAM_TYPE: &str = "string";
pub(crate) const DEFAULT_RESPONSE_DESCRIPTION: &str = "No description";

/// Build a 2.0 operation tagged with its controller's tag.
pub fn build_operation(op: &swagger12::Operation, tag: &str) -> Operation {
    let parameters = op.parameters.iter().map(convert_parameter).collect();

    let mut responses = IndexMap::new();
    for message in &op.response_messages {
        responses.insert(message.code.to_string(), convert_response(message));
    }

    Operation {
        tags: vec![tag.to_string()],
        summary: op.summary.clone(),
        description: op.notes.clone(),
        parameters: Some(parameters),
        responses: Some(responses),
        consumes: op.consumes.clone(),
        produces: op.produces.clone(),
    }
}

pub fn convert_parameter(param: &swagger12::Parameter) -> Parameter {
    let param_type = param
        .param_kind
        .as_deref()
        .unwrap_or(DEFAULT_PARAM_TYPE)
        .to_lowercase();

    Parameter {
        name: param.name.clone(),
        location: param.param_type.clone(),
        description: param.description.clone(),
        required: param.required,
        param_type,
        format: param.format.clone(),
        items: param.items.as_ref().map(convert_items),
    }
}

pub fn convert_response(message: &swagger12::ResponseMessage) -> Response {
    // Absent, null and empty messages all fall back to the default.
    let description = message
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_RESPONSE_DESCRIPTION)
        .to_string();

    let schema = message
        .response_model
        .as_deref()
        .filter(|model| !model.is_empty())
        .map(SchemaRef::definition);

    Response {
        description,
        schema,
    }
}

#[cfg(test)]
mod tests {
    use crate::swagger2::Items;

    use super::*;

    fn param(kind: Option<&str>, format: Option<&str>) -> swagger12::Parameter {
        swagger12::Parameter {
            name: "id".to_string(),
            param_type: "path".to_string(),
            required: true,
            param_kind: kind.map(String::from),
            format: format.map(String::from),
            description: None,
            items: None,
        }
    }

    fn message(text: Option<&str>, model: Option<&str>) -> swagger12::ResponseMessage {
        swagger12::ResponseMessage {
            code: 200,
            message: text.map(String::from),
            response_model: model.map(String::from),
        }
    }

    #[test]
    fn test_parameter_type_defaults_to_string() {
        let p = convert_parameter(&param(None, None));
        assert_eq!(p.param_type, "string");
        assert_eq!(p.location, "path");
        assert!(p.required);
        assert_eq!(p.format, None);
        assert_eq!(p.description, None);
    }

    #[test]
    fn test_parameter_type_lowercased_and_format_kept() {
        let p = convert_parameter(&param(Some("Integer"), Some("int64")));
        assert_eq!(p.param_type, "integer");
        assert_eq!(p.format.as_deref(), Some("int64"));
    }

    #[test]
    fn test_array_parameter_keeps_items() {
        let mut ids = param(Some("array"), None);
        ids.param_type = "query".to_string();
        ids.items = Some(swagger12::ModelItems {
            item_type: Some("Integer".to_string()),
            format: Some("int64".to_string()),
            ..Default::default()
        });

        let p = convert_parameter(&ids);
        assert_eq!(p.param_type, "array");
        assert_eq!(
            p.items,
            Some(Items::Inline {
                item_type: "integer".to_string(),
                format: Some("int64".to_string()),
            })
        );
        assert_eq!(convert_parameter(&param(None, None)).items, None);
    }

    #[test]
    fn test_response_description_defaults() {
        for text in [None, Some("")] {
            let r = convert_response(&message(text, None));
            assert_eq!(r.description, "No description");
        }
        let r = convert_response(&message(Some("OK"), None));
        assert_eq!(r.description, "OK");
    }

    #[test]
    fn test_response_schema_only_for_non_empty_model() {
        assert_eq!(convert_response(&message(Some("OK"), None)).schema, None);
        assert_eq!(convert_response(&message(Some("OK"), Some(""))).schema, None);

        let r = convert_response(&message(Some("OK"), Some("Pet")));
        assert_eq!(r.schema, Some(SchemaRef::definition("Pet")));
        assert_eq!(r.schema.unwrap().ref_path, "#/definitions/Pet");
    }

    #[test]
    fn test_build_operation_copies_fields() {
        let op = swagger12::Operation {
            method: "POST".to_string(),
            summary: Some("Add a pet".to_string()),
            notes: Some("Long notes".to_string()),
            nickname: None,
            parameters: vec![param(None, None)],
            response_messages: vec![message(Some("Created"), Some("Pet"))],
            consumes: Some(vec!["application/json".to_string()]),
            produces: None,
        };

        let built = build_operation(&op, "pet");
        assert_eq!(built.tags, vec!["pet".to_string()]);
        assert_eq!(built.summary.as_deref(), Some("Add a pet"));
        assert_eq!(built.description.as_deref(), Some("Long notes"));
        assert_eq!(built.parameters.as_ref().map(Vec::len), Some(1));
        let responses = built.responses.as_ref().unwrap();
        assert!(responses.contains_key("200"));
        assert_eq!(built.consumes, Some(vec!["application/json".to_string()]));
        assert_eq!(built.produces, None);
    }
}
