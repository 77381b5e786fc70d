use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Missing required key: {key}")]
    MissingKey { key: &'static str },

    #[error("Unexpected type for {field}: expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Failed to parse record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read log: {0}")]
    FileReadError(#[from] std::io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
