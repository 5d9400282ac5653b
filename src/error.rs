//! Error types for block pack loading and color metadata decoding.
//!
//! `InvalidMetadataError` never reaches `BlockPackError`: the color
//! component turns it into the default color at the boundary.

use thiserror::Error;

/// Result type alias using BlockPackError.
pub type Result<T> = std::result::Result<T, BlockPackError>;

/// A persisted color code outside the 16-value dye range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid color metadata {0} (expected 0..=15)")]
pub struct InvalidMetadataError(pub i32);

/// Main error type for block pack operations.
#[derive(Error, Debug)]
pub enum BlockPackError {
    /// Failed to read or parse a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid block pack structure.
    #[error("Invalid block pack: {0}")]
    InvalidPack(String),

    /// A descriptor file could not be parsed.
    #[error("Invalid descriptor {file}: {message}")]
    InvalidDescriptor { file: String, message: String },

    /// Two descriptors in the same pack share a name.
    #[error("Duplicate block name in pack: {0}")]
    DuplicateBlock(String),
}
