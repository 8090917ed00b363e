//! Core utilities shared by the filters.
//!
//! This module provides:
//! - BT.601 luma
//! - Rounding from f32 intermediates back to u8
//! - The 3x3 neighborhood driver used by blur, sharpen and edge detection

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::error::FilterResult;

/// ITU-R BT.601 luma coefficients
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Perceptual brightness of an RGB triple (BT.601 weights).
#[inline]
pub fn luma_bt601(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Clamp to [0, 255] and round half-up.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_round_u8(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// A 3x3 weight matrix indexed `[dy + 1][dx + 1]`.
pub type Kernel3 = [[f32; 3]; 3];

/// Weighted sum of one channel over the 3x3 window centred on `(y, x)`.
///
/// Caller guarantees `(y, x)` is an interior pixel.
#[inline]
pub fn weighted_sum_3x3(
    input: &ArrayView3<u8>,
    y: usize,
    x: usize,
    c: usize,
    kernel: &Kernel3,
) -> f32 {
    let mut sum = 0.0f32;
    for (ky, row) in kernel.iter().enumerate() {
        for (kx, &w) in row.iter().enumerate() {
            if w != 0.0 {
                sum += input[[y + ky - 1, x + kx - 1, c]] as f32 * w;
            }
        }
    }
    sum
}

/// Run a 3x3 neighborhood operation over the interior of an RGBA image.
///
/// The output starts as a copy of `input`, so the 1-pixel border and the
/// alpha channel of every pixel keep their input values. `pixel(y, x)` is
/// called once per interior pixel and returns the new R, G, B. It only ever
/// sees `input` and output rows are disjoint, so with `parallel` set rayon
/// gets one row per task.
///
/// Images narrower or shorter than 3 pixels have no interior and come back
/// unchanged.
pub fn convolve_interior<F>(
    input: ArrayView3<u8>,
    parallel: bool,
    pixel: F,
) -> FilterResult<Array3<u8>>
where
    F: Fn(usize, usize) -> [u8; 3] + Sync,
{
    let (height, width, channels) = input.dim();
    let mut output_flat: Vec<u8> = input.iter().copied().collect();

    if height < 3 || width < 3 {
        return Ok(Array3::from_shape_vec((height, width, channels), output_flat)?);
    }

    let process_row = |(y, row): (usize, &mut [u8])| {
        if y == 0 || y == height - 1 {
            return;
        }
        for x in 1..width - 1 {
            let base = x * channels;
            row[base..base + 3].copy_from_slice(&pixel(y, x));
        }
    };

    if parallel {
        output_flat
            .par_chunks_mut(width * channels)
            .enumerate()
            .for_each(&process_row);
    } else {
        output_flat
            .chunks_mut(width * channels)
            .enumerate()
            .for_each(&process_row);
    }

    Ok(Array3::from_shape_vec((height, width, channels), output_flat)?)
}
