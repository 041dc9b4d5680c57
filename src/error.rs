//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode/encode and resize errors, and provides semantic
//! variants for missing sources and argument validation.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::AssetKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing {kind} source: {}", path.display())]
    MissingSource { kind: AssetKind, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("{arg} must be greater than 0")]
    ZeroSize { arg: &'static str },

    #[error("Processing error: {0}")]
    Processing(String),
}
