//! Error types for template configuration operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("Unknown {kind}: {value:?} (expected one of: {allowed})")]
    UnknownChoice {
        kind: &'static str,
        value: String,
        allowed: &'static str,
    },

    #[error("Template id must not be empty")]
    EmptyId,

    #[error("Template name must not be empty")]
    EmptyName,

    #[error("Branding requires a primary color")]
    MissingPrimaryColor,

    #[error("Invalid hex color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
