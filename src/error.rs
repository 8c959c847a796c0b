use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContrastError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("No image data found in response")]
    NoImageData,
    #[error("Decode error: {0}")]
    DecodeError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ContrastError {
    /// Failures that happen while talking to the remote model, as opposed to
    /// precondition failures caught before any network activity.
    pub fn is_generation_error(&self) -> bool {
        matches!(
            self,
            ContrastError::RequestError(_)
                | ContrastError::ResponseError(_)
                | ContrastError::SerializationError(_)
                | ContrastError::NoImageData
                | ContrastError::InternalError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ContrastError>;
