//! Error types for template store operations

use thiserror::Error;

/// Errors that can occur during template store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template already exists
    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    /// Invalid template ID
    #[error("Invalid template id: {0}")]
    InvalidId(String),

    /// Stored record is missing config fields
    #[error("Template {id} is incomplete, missing fields: {fields:?}")]
    Incomplete {
        id: String,
        fields: Vec<&'static str>,
    },

    /// Configuration error in a stored or incoming template
    #[error("Invalid template config: {0}")]
    Config(#[from] template_model::ConfigError),
}

/// Result type for template store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
