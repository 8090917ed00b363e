//! 3x3 box blur for RGBA images.
//!
//! Each interior channel becomes the mean of its 9-pixel neighborhood.
//! The 1-pixel border is copied from the input and alpha is preserved.

use ndarray::{Array3, ArrayView3};

use super::core::{clamp_round_u8, convolve_interior, weighted_sum_3x3, Kernel3};
use crate::error::FilterResult;

const BOX_3X3: Kernel3 = [[1.0; 3]; 3];

/// Apply a 3x3 box blur.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `parallel` - Shard rows across the rayon pool
///
/// # Returns
/// Blurred RGBA image with same dimensions
pub fn box_blur_3x3_u8(input: ArrayView3<u8>, parallel: bool) -> FilterResult<Array3<u8>> {
    convolve_interior(input, parallel, |y, x| {
        let mut rgb = [0u8; 3];
        for (c, out) in rgb.iter_mut().enumerate() {
            *out = clamp_round_u8(weighted_sum_3x3(&input, y, x, c, &BOX_3X3) / 9.0);
        }
        rgb
    })
}
