//! Error types for giza operations.
//!
//! Axis drawing itself never fails: bad input is logged and skipped. Errors
//! are reserved for constructors, configuration loading and file output.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in giza operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer or device.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Axis range whose two ends coincide (or are not finite).
    #[error("Degenerate axis range: {min} to {max}")]
    DegenerateRange {
        /// Value at the start of the axis.
        min: f64,
        /// Value at the end of the axis.
        max: f64,
    },

    /// Style configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
