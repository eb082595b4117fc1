use thiserror::Error;

#[derive(Debug, Error)]
pub enum RnsvgError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Schema JSON error: {0}")]
    SchemaJson(#[from] serde_json::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
