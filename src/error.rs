#[derive(Debug, thiserror::Error)]
pub enum NutriscanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Catalog integrity error: {0}")]
    Integrity(String),
}

pub type Result<T> = std::result::Result<T, NutriscanError>;
