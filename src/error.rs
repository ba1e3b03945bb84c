//! Error types for strata.
//!
//! Only *configuration* can fail. Chunking itself is infallible: a span that
//! cannot be split below the size limit is emitted with the `oversized` flag
//! set, never as an error.

/// Errors raised when validating chunker configuration.
///
/// All validation happens at construction time, before any text is touched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Invalid chunk size (must be > 0).
    #[error("invalid max chunk size: 0 (must be > 0)")]
    ZeroChunkSize,

    /// Overlap must be strictly smaller than the chunk size.
    #[error("overlap {overlap} exceeds chunk size {size}")]
    OverlapExceedsSize {
        /// The maximum chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// The separator hierarchy must contain at least one entry.
    #[error("separator list must not be empty")]
    EmptySeparators,
}

/// Result type for strata configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
