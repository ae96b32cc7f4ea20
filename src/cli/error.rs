//! CLI-specific error types

use crate::convert::ConversionError;
use std::path::PathBuf;
use thiserror::Error;

/// Usage line printed when a positional argument is missing or empty
pub const USAGE: &str = "Usage: fix-schema input.json output.json";

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to parse JSON from {0}: {1}")]
    ParseError(PathBuf, String),

    #[error("Conversion error: {0}")]
    ConversionError(#[from] ConversionError),

    #[error("Failed to serialize output: {0}")]
    SerializationError(String),

    #[error("Schema validation error: {0}")]
    ValidationError(String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),
}
