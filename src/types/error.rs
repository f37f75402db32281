//! Error types for the edgemap library.

use thiserror::Error;

/// All errors that can occur in the edgemap library.
///
/// In-memory graph operations never fault: lookups on absent vertices or
/// edges degrade to `false`/`None`/empty results. Errors only arise from the
/// persistence layer.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Invalid magic bytes in file header.
    #[error("Invalid magic bytes in file header")]
    InvalidMagic,

    /// Unsupported format version.
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// File is empty or truncated.
    #[error("File is empty or truncated")]
    Truncated,

    /// Corrupt data at a given offset.
    #[error("Corrupt data at offset {0}")]
    Corrupt(u64),

    /// Edge label exceeds the maximum size.
    #[error("Edge label exceeds maximum size: {size} > {max}")]
    LabelTooLarge { size: usize, max: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for edgemap operations.
pub type GraphResult<T> = Result<T, GraphError>;
