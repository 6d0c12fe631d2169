use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::OutputFormat;
use crate::error::RenderError;
use crate::swagger2::SwaggerDoc;

pub const DEFAULT_INDENT: usize = 2;

/// Render a document in the requested format.
pub fn render(
    doc: &SwaggerDoc,
    format: OutputFormat,
    indent: usize,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Json => to_json(doc, indent),
        OutputFormat::Yaml => to_yaml(doc),
    }
}

/// Pretty-printed JSON with `indent` spaces per level. Non-ASCII text is
/// written as-is.
pub fn to_json(doc: &SwaggerDoc, indent: usize) -> Result<String, RenderError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

pub fn to_yaml(doc: &SwaggerDoc) -> Result<String, RenderError> {
    Ok(serde_yaml_ng::to_string(doc)?)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn doc() -> SwaggerDoc {
        let mut info = serde_json::Map::new();
        info.insert("title".to_string(), "Zoo — Ünïcode 動物".into());
        SwaggerDoc {
            swagger: "2.0".to_string(),
            info,
            host: "host".to_string(),
            base_path: "/v1".to_string(),
            schemes: vec!["http".to_string()],
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_json_keeps_non_ascii() {
        let json = to_json(&doc(), 2).unwrap();
        assert!(json.contains("Zoo — Ünïcode 動物"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_json_indent_and_key_order() {
        let json = to_json(&doc(), 4).unwrap();
        assert!(json.starts_with("{\n    \"swagger\": \"2.0\",\n    \"info\""));
        let base = json.find("\"basePath\"").unwrap();
        let tags = json.find("\"tags\"").unwrap();
        assert!(base < tags);
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_yaml() {
        let yaml = to_yaml(&doc()).unwrap();
        assert!(yaml.contains("basePath: /v1"));
        assert!(yaml.contains("swagger: '2.0'"));
    }
}
