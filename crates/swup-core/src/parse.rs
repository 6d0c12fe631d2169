use serde_json::Value;

use crate::error::ParseError;
use crate::swagger12::{ApiDeclaration, ResourceListing};

/// Fields a resource listing cannot be converted without.
const REQUIRED_LISTING_FIELDS: [&str; 2] = ["info", "apis"];

/// Parse a resource listing from JSON text.
pub fn resource_listing_from_json(input: &str) -> Result<ResourceListing, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    resource_listing_from_value(value)
}

/// Build a resource listing from an already-parsed JSON value.
pub fn resource_listing_from_value(value: Value) -> Result<ResourceListing, ParseError> {
    let root = value.as_object().ok_or(ParseError::NotAnObject)?;
    for field in REQUIRED_LISTING_FIELDS {
        if root.get(field).is_none_or(Value::is_null) {
            return Err(ParseError::MissingField(field.to_string()));
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse an API declaration from JSON text.
pub fn api_declaration_from_json(input: &str) -> Result<ApiDeclaration, ParseError> {
    let value: Value = serde_json::from_str(input)?;
    api_declaration_from_value(value)
}

/// Build an API declaration from an already-parsed JSON value.
///
/// An empty object is a valid declaration with no endpoints.
pub fn api_declaration_from_value(value: Value) -> Result<ApiDeclaration, ParseError> {
    if !value.is_object() {
        return Err(ParseError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_info() {
        let err = resource_listing_from_json(r#"{"apis": []}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(f) if f == "info"));
    }

    #[test]
    fn test_missing_apis() {
        let err = resource_listing_from_json(r#"{"info": {"title": "x"}}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(f) if f == "apis"));
    }

    #[test]
    fn test_null_apis_counts_as_missing() {
        let err = resource_listing_from_json(r#"{"info": {}, "apis": null}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingField(f) if f == "apis"));
    }

    #[test]
    fn test_not_an_object() {
        let err = resource_listing_from_json("[]").unwrap_err();
        assert!(matches!(err, ParseError::NotAnObject));
    }

    #[test]
    fn test_minimal_listing() {
        let listing = resource_listing_from_json(r#"{"info": {}, "apis": []}"#).unwrap();
        assert!(listing.apis.is_empty());
        assert!(listing.models.is_empty());
        assert_eq!(listing.api_version, None);
    }

    #[test]
    fn test_empty_declaration() {
        let decl = api_declaration_from_json("{}").unwrap();
        assert!(decl.apis.is_empty());
    }

    #[test]
    fn test_parameter_required_defaults_false() {
        let decl = api_declaration_from_json(
            r#"{"apis": [{"path": "/a", "operations": [{"method": "GET",
                "parameters": [{"name": "q", "paramType": "query"}]}]}]}"#,
        )
        .unwrap();
        let param = &decl.apis[0].operations[0].parameters[0];
        assert!(!param.required);
        assert_eq!(param.param_kind, None);
    }
}
