//! Edge detection filter.
//!
//! A plain central-difference gradient over the 3x3 window, computed for
//! each color channel separately and combined into one magnitude:
//!
//! ```text
//!   gx = sum(dx * v)   with dx in {-1, 0, 1} per column
//!   gy = sum(dy * v)   with dy in {-1, 0, 1} per row
//!   magnitude = sqrt(sum over R,G,B of gx^2 + gy^2) / 2
//! ```
//!
//! Unlike sharpen, the channels are not independent: the same clamped
//! magnitude is written to R, G and B. Alpha and the border come from the
//! input.

use ndarray::{Array3, ArrayView3};

use super::core::{clamp_round_u8, convolve_interior, weighted_sum_3x3, Kernel3};
use crate::error::FilterResult;

const GRADIENT_X: Kernel3 = [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]];
const GRADIENT_Y: Kernel3 = [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

/// Apply edge detection.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `parallel` - Shard rows across the rayon pool
///
/// # Returns
/// Grayscale edge map with alpha and border copied from `input`
pub fn edge_detect_u8(input: ArrayView3<u8>, parallel: bool) -> FilterResult<Array3<u8>> {
    convolve_interior(input, parallel, |y, x| {
        let mut energy = 0.0f32;
        for c in 0..3 {
            let gx = weighted_sum_3x3(&input, y, x, c, &GRADIENT_X);
            let gy = weighted_sum_3x3(&input, y, x, c, &GRADIENT_Y);
            energy += gx * gx + gy * gy;
        }
        let magnitude = clamp_round_u8(energy.sqrt() / 2.0);
        [magnitude; 3]
    })
}
