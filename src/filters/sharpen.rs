//! 3x3 sharpen filter.
//!
//! Center weight 5, surrounding weight -1, each of R, G, B convolved
//! independently and clamped. Two neighborhood shapes are available:
//!
//! ```text
//!   Cross            Box
//!   0 -1  0         -1 -1 -1
//!  -1  5 -1         -1  5 -1
//!   0 -1  0         -1 -1 -1
//! ```
//!
//! `Box` is the photo editor's kernel. It sums to -3: only strong local
//! detail survives and flat regions go dark. `Cross` has unity gain, so flat
//! regions come through unchanged.

use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};

use super::core::{clamp_round_u8, convolve_interior, weighted_sum_3x3, Kernel3};
use crate::error::FilterResult;

/// Neighborhood shape of the sharpen kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpenKernel {
    /// All eight neighbors
    #[default]
    Box,
    /// Four edge-adjacent neighbors
    Cross,
}

impl SharpenKernel {
    pub fn weights(self) -> Kernel3 {
        match self {
            SharpenKernel::Box => [[-1.0, -1.0, -1.0], [-1.0, 5.0, -1.0], [-1.0, -1.0, -1.0]],
            SharpenKernel::Cross => [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
        }
    }
}

/// Apply the sharpen kernel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `kernel` - Neighborhood shape
/// * `parallel` - Shard rows across the rayon pool
///
/// # Returns
/// Sharpened image; border and alpha copied from `input`
pub fn sharpen_u8(
    input: ArrayView3<u8>,
    kernel: SharpenKernel,
    parallel: bool,
) -> FilterResult<Array3<u8>> {
    let weights = kernel.weights();

    convolve_interior(input, parallel, |y, x| {
        let mut rgb = [0u8; 3];
        for (c, out) in rgb.iter_mut().enumerate() {
            *out = clamp_round_u8(weighted_sum_3x3(&input, y, x, c, &weights));
        }
        rgb
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center_with_neighbors(center: u8, neighbor: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        for y in 0..3 {
            for x in 0..3 {
                for c in 0..3 {
                    img[[y, x, c]] = neighbor;
                }
                img[[y, x, 3]] = 255;
            }
        }
        for c in 0..3 {
            img[[1, 1, c]] = center;
        }
        img[[1, 1, 3]] = 120;
        img
    }

    #[test]
    fn test_sharpen_cross_flat_region_unchanged() {
        let img = Array3::<u8>::from_elem((5, 5, 4), 90);
        let result = sharpen_u8(img.view(), SharpenKernel::Cross, false).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_sharpen_cross_boosts_center() {
        // 5 * 60 - 4 * 50 = 100
        let img = center_with_neighbors(60, 50);
        let result = sharpen_u8(img.view(), SharpenKernel::Cross, false).unwrap();
        assert_eq!(result[[1, 1, 0]], 100);
        assert_eq!(result[[1, 1, 3]], 120);
    }

    #[test]
    fn test_sharpen_clamps_high_and_low() {
        // 5 * 100 - 4 * 50 = 300
        let img = center_with_neighbors(100, 50);
        let result = sharpen_u8(img.view(), SharpenKernel::Cross, false).unwrap();
        assert_eq!(result[[1, 1, 0]], 255);

        // 5 * 10 - 4 * 200 < 0
        let img = center_with_neighbors(10, 200);
        let result = sharpen_u8(img.view(), SharpenKernel::Cross, false).unwrap();
        assert_eq!(result[[1, 1, 0]], 0);
    }

    #[test]
    fn test_sharpen_box_uses_corners() {
        // 5 * 200 - 8 * 100 = 200
        let img = center_with_neighbors(200, 100);
        let result = sharpen_u8(img.view(), SharpenKernel::Box, false).unwrap();
        assert_eq!(result[[1, 1, 0]], 200);

        // Flat region: 5v - 8v clamps to 0
        let flat = Array3::<u8>::from_elem((3, 3, 4), 90);
        let result = sharpen_u8(flat.view(), SharpenKernel::Box, false).unwrap();
        assert_eq!(result[[1, 1, 0]], 0);
        assert_eq!(result[[1, 1, 3]], 90);
    }

    #[test]
    fn test_sharpen_channels_independent() {
        let mut img = Array3::<u8>::from_elem((3, 3, 4), 0);
        img[[1, 1, 1]] = 40;
        let result = sharpen_u8(img.view(), SharpenKernel::Cross, false).unwrap();
        assert_eq!(result[[1, 1, 0]], 0);
        assert_eq!(result[[1, 1, 1]], 200);
        assert_eq!(result[[1, 1, 2]], 0);
    }

    #[test]
    fn test_sharpen_kernel_serde_names() {
        let kernel: SharpenKernel = serde_yaml::from_str("cross").unwrap();
        assert_eq!(kernel, SharpenKernel::Cross);
        assert_eq!(SharpenKernel::default(), SharpenKernel::Box);
    }
}
