use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("expected a JSON object at the document root")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum OriginError {
    #[error("the URL `{0}` does not end with 'api-docs'")]
    NotApiDocs(String),

    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("the URL `{0}` has no host")]
    MissingHost(String),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("origin error: {0}")]
    Origin(#[from] OriginError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("rendered JSON was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
