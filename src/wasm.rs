//! WebAssembly exports for the browser photo editor.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. They take the
//! flat RGBA bytes of a canvas `ImageData` plus its dimensions and return the
//! filtered bytes in the same layout, ready for `putImageData`.
//!
//! WASM runs without a thread pool, so the pipeline here is always
//! sequential.

use wasm_bindgen::prelude::*;

use crate::buffer::PixelBuffer;
use crate::config::FilterConfig;
use crate::pipeline::{AdjustmentParams, FilterKind, Pipeline};

fn pipeline() -> Pipeline {
    Pipeline::new(FilterConfig::sequential())
}

// ============================================================================
// Filters
// ============================================================================

/// Apply a named filter to RGBA bytes.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `filter` - One of "grayscale", "sepia", "invert", "blur", "sharpen", "edge"
///
/// # Returns
/// Flat array of filtered RGBA bytes, or an error for a length mismatch or
/// unknown filter
#[wasm_bindgen]
pub fn apply_filter_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    filter: &str,
) -> Result<Vec<u8>, JsError> {
    let kind: FilterKind = filter.parse()?;
    let buffer = PixelBuffer::from_raw(width, height, data.to_vec())?;
    let result = pipeline().apply_filter(buffer, kind)?;
    Ok(result.into_raw())
}

// ============================================================================
// Adjustments
// ============================================================================

/// Apply the brightness / contrast / saturation sliders to RGBA bytes.
///
/// Slider values are sanitized first, so NaN from an empty input field
/// counts as 0.
#[wasm_bindgen]
pub fn apply_adjustments_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    brightness: f32,
    contrast: f32,
    saturation: f32,
) -> Result<Vec<u8>, JsError> {
    let params = AdjustmentParams::new(brightness, contrast, saturation).sanitized();
    let mut buffer = PixelBuffer::from_raw(width, height, data.to_vec())?;
    pipeline().apply_adjustments(&mut buffer, params)?;
    Ok(buffer.into_raw())
}
