use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reference entry '{key}' not found in input data")]
    MissingReference { key: &'static str },

    #[error("entry '{label}' has {files} files but {vectors} vectors")]
    ShapeMismatch {
        label: String,
        files: usize,
        vectors: usize,
    },

    #[error("reference entry has no vectors")]
    EmptyReference,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse input data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
