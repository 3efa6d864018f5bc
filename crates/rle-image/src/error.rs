use std::{collections::TryReserveError, io};

use thiserror::Error;

/// An error when encoding or decoding a run-length image
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RleError {
    /// The pixel buffer does not match the declared dimensions
    #[error("Invalid dimensions {width}x{height} for a buffer of {len} bytes")]
    InvalidDimensions {
        /// The declared width
        width: u32,
        /// The declared height
        height: u32,
        /// The actual length of the pixel buffer
        len: usize,
    },

    /// The stream ended before the declared number of bytes
    #[error("Truncated stream: expected {expected} bytes, got {actual}")]
    TruncatedStream {
        /// The number of bytes required by the header
        expected: usize,
        /// The number of bytes that were available
        actual: usize,
    },

    /// The header describes an image that no raster can produce
    #[error("Malformed header: {count} transitions for {width}x{height} pixels")]
    MalformedHeader {
        /// The width from the header
        width: u32,
        /// The height from the header
        height: u32,
        /// The transition count from the header
        count: u32,
    },

    /// The buffer for drawing could not be allocated
    #[error("Failed to allocate {len} bytes for drawing")]
    Allocation {
        /// The requested number of bytes
        len: usize,
        /// The allocator error
        #[source]
        source: TryReserveError,
    },

    /// The underlying reader failed
    #[error("Failed IO")]
    Io(#[from] io::Error),
}

/// Type alias for convenience
pub type RleResult<T> = Result<T, RleError>;
