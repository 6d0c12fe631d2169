use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::render::DEFAULT_INDENT;

/// Project configuration loaded from `.swup.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SwupConfig {
    /// Resource listing URL; must end in `api-docs`.
    pub url: Option<String>,
    /// Read documents from this directory instead of over HTTP.
    pub local: Option<String>,
    pub output: String,
    pub format: OutputFormat,
    pub indent: usize,
    pub timeout_secs: u64,
}

impl Default for SwupConfig {
    fn default() -> Self {
        Self {
            url: None,
            local: None,
            output: "swagger.json".to_string(),
            format: OutputFormat::Json,
            indent: DEFAULT_INDENT,
            timeout_secs: 30,
        }
    }
}

/// Serialization format of the converted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swup.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SwupConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: SwupConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swup configuration
# url: http://localhost:8080/v1/api-docs   # must end in api-docs
# local: ./docs                            # offline: read api-docs.json and declarations from here
output: swagger.json
format: json          # json | yaml
indent: 2
timeout_secs: 30
"#
}
