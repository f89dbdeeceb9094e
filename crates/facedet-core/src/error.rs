use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the facedet pipeline.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Empty input: zero-length image buffer")]
    EmptyInput,

    #[error("Cascade model not found: {}", .0.display())]
    ModelMissing(PathBuf),

    #[error("Cascade model load error: {0}")]
    ModelLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectError>;
