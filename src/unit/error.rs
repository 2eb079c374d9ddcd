use thiserror::Error;

/// Errors raised while reading configuration or style documents.
///
/// Conversion itself never fails; these only cover the loaders around it.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported value for '{property}': expected a number, a string or null, got {kind}")]
    UnsupportedValue { property: String, kind: String },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, UnitError>;
