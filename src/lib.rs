//! PhotoFX Rust Extensions
//!
//! The photo editor's filter pipeline implemented in Rust, with Python
//! bindings via PyO3 and WASM bindings for the browser editor.
//!
//! ## Image Format
//! All filters work on RGBA u8 images: (height, width, 4), row-major,
//! top-left origin. That is the byte order of a canvas `ImageData` buffer.
//!
//! ## Operations
//! - **Point filters** (in place): grayscale, sepia, invert
//! - **3x3 neighborhood filters** (new buffer): blur, sharpen, edge detect
//! - **Adjustments** (in place): brightness, contrast, saturation
//!
//! ```
//! use photofx_rust::{FilterKind, Pipeline, PixelBuffer};
//!
//! let buffer = PixelBuffer::filled(4, 4, [10, 20, 30, 255]);
//! let inverted = Pipeline::default().apply_filter(buffer, FilterKind::Invert)?;
//! assert_eq!(inverted.pixel(0, 0), Some([245, 235, 225, 255]));
//! # Ok::<(), photofx_rust::FilterError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod filters;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::PixelBuffer;
pub use config::{load_filter_config, FilterConfig, FilterConfigHandle};
pub use error::{FilterError, FilterResult};
pub use filters::sharpen::SharpenKernel;
pub use pipeline::{
    apply_adjustments, apply_convolution, apply_point_filter, AdjustmentParams, FilterKind,
    Pipeline,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::prelude::*;

    use crate::buffer::PixelBuffer;
    use crate::config::load_filter_config;
    use crate::pipeline::{AdjustmentParams, FilterKind, Pipeline};

    fn pipeline() -> Pipeline {
        Pipeline::new(load_filter_config(None).config)
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Apply a named filter to an RGBA u8 image.
    ///
    /// # Arguments
    /// * `image` - Input image (height, width, 4)
    /// * `filter` - One of "grayscale", "sepia", "invert", "blur", "sharpen", "edge"
    ///
    /// # Returns
    /// New image with the same shape. Raises ValueError for unknown filters
    /// or non-RGBA input.
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        filter: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let kind: FilterKind = filter.parse()?;
        let buffer = PixelBuffer::from_array(image.as_array().to_owned())?;
        let result = py.allow_threads(|| pipeline().apply_filter(buffer, kind))?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Names accepted by `apply_filter`.
    #[pyfunction]
    pub fn filter_names() -> Vec<&'static str> {
        FilterKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    // ========================================================================
    // Adjustments
    // ========================================================================

    /// Apply brightness, contrast and saturation to an RGBA u8 image.
    ///
    /// Slider values are sanitized first: NaN becomes 0 and a contrast on the
    /// singular point is moved just below it.
    #[pyfunction]
    #[pyo3(signature = (image, brightness=0.0, contrast=0.0, saturation=0.0))]
    pub fn adjust<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        brightness: f32,
        contrast: f32,
        saturation: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let params = AdjustmentParams::new(brightness, contrast, saturation).sanitized();
        let mut buffer = PixelBuffer::from_array(image.as_array().to_owned())?;
        py.allow_threads(|| pipeline().apply_adjustments(&mut buffer, params))?;
        Ok(buffer.into_array().into_pyarray(py))
    }

    /// PhotoFX Rust extension module
    #[pymodule]
    pub fn photofx_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(filter_names, m)?)?;
        m.add_function(wrap_pyfunction!(adjust, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::photofx_rust;
