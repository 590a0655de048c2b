use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("invalid dimensions {width}x{height}: width and height must both be at least 1")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel grid holds {actual} samples, expected {expected}")]
    SampleCountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to decode {}: {message}", path.display())]
    DecodeFailure { path: PathBuf, message: String },

    #[error("invalid dimensions {width}x{height}: width and height must both be at least 1")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to write {}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' is not a valid C identifier")]
    InvalidSymbol(String),

    #[error("config error: {0}")]
    Config(String),
}
