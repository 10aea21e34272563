use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        ServiceError::Serialization(e.to_string())
    }
}
