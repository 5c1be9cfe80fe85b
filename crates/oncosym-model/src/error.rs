//! Error types for model training, persistence and inference.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Tensor error: {0}")]
    Tensor(String),

    #[error("Missing artifact: {0}")]
    MissingArtifact(PathBuf),

    #[error("Corrupt artifact {path}: {reason}")]
    CorruptArtifact { path: PathBuf, reason: String },

    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid feature columns: {0}")]
    InvalidFeatures(String),

    #[error("Unknown class label: {0}")]
    UnknownLabel(String),

    #[error("Empty training set")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<candle_core::Error> for ModelError {
    fn from(e: candle_core::Error) -> Self {
        ModelError::Tensor(e.to_string())
    }
}
