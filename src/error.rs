//! Error types for rendering and configuration.

use thiserror::Error;

/// Errors reported by the renderer core.
///
/// These are programming or configuration errors, never transient
/// failures: nothing here is retried automatically, and recovery (for
/// example keeping the previous valid configuration) is the caller's
/// responsibility.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Ray direction has zero length; the intersection quadratic
    /// degenerates and cannot be solved.
    #[error("degenerate ray: direction has zero length")]
    DegenerateRay,

    /// Destination buffer length does not match the current resolution.
    ///
    /// Raised before any pixel is written, so a failed render pass never
    /// leaves a partially updated buffer.
    #[error("pixel buffer size mismatch: expected {expected} floats, got {actual}")]
    BufferSizeMismatch {
        /// Required length, `resolution² * 4`.
        expected: usize,
        /// Length of the buffer actually supplied.
        actual: usize,
    },

    /// Camera or scene parameters rejected at configuration time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O failure while writing an image file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding failure while writing an image file.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
