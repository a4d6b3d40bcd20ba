/// Errors produced while building, writing or checking the crosshair icon
use image::{ColorType, ImageError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    /// Target file could not be created or written (e.g. missing directory)
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] ImageError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Invalid icon dimensions: {width}x{height} (expected {expected}x{expected})")]
    Dimensions {
        width: u32,
        height: u32,
        expected: u32,
    },

    #[error("Icon has no alpha channel (color type {0:?})")]
    MissingAlpha(ColorType),
}

pub type Result<T> = std::result::Result<T, IconError>;
