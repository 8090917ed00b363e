//! Error types for the filter pipeline.

use thiserror::Error;

use crate::pipeline::FilterKind;

/// Errors that can occur while building buffers or applying filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Raw byte length does not match width * height * 4
    #[error("buffer length {len} does not match {width}x{height} RGBA ({expected} bytes)")]
    LengthMismatch {
        width: usize,
        height: usize,
        len: usize,
        expected: usize,
    },

    /// Only RGBA (4 channel) images are accepted
    #[error("expected 4 channels (RGBA), got {0}")]
    UnsupportedChannels(usize),

    /// width * height * 4 does not fit in usize
    #[error("image dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: usize, height: usize },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) is outside a {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Filter name not recognized
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Filter passed to an entry point of the wrong category
    #[error("{kind} is not a {expected} filter")]
    WrongCategory {
        kind: FilterKind,
        expected: &'static str,
    },

    /// Adjustment parameter outside its defined domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// ndarray shape error
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(feature = "python")]
impl From<FilterError> for pyo3::PyErr {
    fn from(err: FilterError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
