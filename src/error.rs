//! Error Types
//!
//! Typed errors shared by the index, inference, and vault modules.

/// Error type for flashcore operations.
///
/// Every error is caller-correctable and non-retryable: the operation that
/// failed performed no mutation, and the handle it was called on remains
/// fully usable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed construction parameters, an under-length vector buffer,
    /// or an out-of-range `k`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Insertion attempted on an index that already holds `capacity` entries.
    #[error("index is full (capacity {capacity})")]
    IndexFull { capacity: usize },
}

/// Result type for flashcore operations
pub type Result<T> = std::result::Result<T, Error>;
