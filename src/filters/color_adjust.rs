//! Color adjustment filters: Invert, Sepia and the combined
//! Brightness / Contrast / Saturation pass.
//!
//! These are pixel-wise operations that don't require spatial context, so
//! they all work in place on a mutable view of shape (height, width, 4).
//! Alpha is never modified.
//!
//! ## Adjustment order
//!
//! The photo editor's three sliders are applied together, per pixel:
//!
//! 1. brightness: `v + brightness`
//! 2. contrast: `factor * (v - 128) + 128`, with
//!    `factor = 259 (contrast + 255) / (255 (259 - contrast))`
//! 3. saturation: `gray + (v - gray) * (1 + saturation / 100)` where `gray`
//!    is the BT.601 luma of the values after steps 1 and 2
//! 4. clamp to [0, 255] and round
//!
//! Intermediate values stay in f32 and may leave [0, 255] between steps.

use ndarray::ArrayViewMut3;
use serde::{Deserialize, Serialize};

use super::core::{clamp_round_u8, luma_bt601};
use crate::error::{FilterError, FilterResult};

// ============================================================================
// Invert
// ============================================================================

/// Invert R, G and B in place.
pub fn invert_in_place(mut image: ArrayViewMut3<u8>) {
    let (height, width, _) = image.dim();

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                image[[y, x, c]] = 255 - image[[y, x, c]];
            }
        }
    }
}

// ============================================================================
// Sepia
// ============================================================================

/// Classic sepia tone matrix, rows produce R', G', B'.
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply the sepia tone matrix in place.
///
/// All weights are positive, so only the upper clamp ever matters.
pub fn sepia_in_place(mut image: ArrayViewMut3<u8>) {
    let (height, width, _) = image.dim();

    for y in 0..height {
        for x in 0..width {
            let r = image[[y, x, 0]] as f32;
            let g = image[[y, x, 1]] as f32;
            let b = image[[y, x, 2]] as f32;

            for (c, row) in SEPIA.iter().enumerate() {
                image[[y, x, c]] = clamp_round_u8(row[0] * r + row[1] * g + row[2] * b);
            }
        }
    }
}

// ============================================================================
// Brightness / Contrast / Saturation
// ============================================================================

/// Contrast value at which the contrast factor's denominator vanishes.
pub const CONTRAST_SINGULARITY: f32 = 259.0;

/// Steepest contrast `sanitized` substitutes for the singular point.
const CONTRAST_SANITIZED_MAX: f32 = CONTRAST_SINGULARITY - 1.0;

/// Slider values for the combined adjustment pass.
///
/// * `brightness` - offset added to each channel, typically -255..255
/// * `contrast` - typically -255..255; any finite value except 259
/// * `saturation` - percent offset, -100 (gray) .. 100 and beyond
///
/// Values outside the typical ranges are accepted and follow the same
/// formulas; only the final output is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParams {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
}

impl AdjustmentParams {
    /// Leaves every pixel unchanged.
    pub const IDENTITY: Self = Self {
        brightness: 0.0,
        contrast: 0.0,
        saturation: 0.0,
    };

    pub fn new(brightness: f32, contrast: f32, saturation: f32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    /// Coerce raw slider input into values `validate` accepts.
    ///
    /// Non-finite values become 0 and a contrast on the singular point moves
    /// to 258. Everything else passes through unchanged.
    pub fn sanitized(self) -> Self {
        let finite_or_zero = |v: f32| if v.is_finite() { v } else { 0.0 };
        let contrast = match finite_or_zero(self.contrast) {
            c if c == CONTRAST_SINGULARITY => CONTRAST_SANITIZED_MAX,
            c => c,
        };
        Self {
            brightness: finite_or_zero(self.brightness),
            contrast,
            saturation: finite_or_zero(self.saturation),
        }
    }

    /// Reject values the adjustment formulas are not defined for: non-finite
    /// inputs and the contrast singular point.
    pub fn validate(&self) -> FilterResult<()> {
        for (name, value) in [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("saturation", self.saturation),
        ] {
            if !value.is_finite() {
                return Err(FilterError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !self.contrast_factor().is_finite() {
            return Err(FilterError::InvalidParameter(format!(
                "contrast must not be {CONTRAST_SINGULARITY}, got {}",
                self.contrast
            )));
        }
        Ok(())
    }

    /// Contrast multiplier; exactly 1.0 when `contrast == 0`.
    ///
    /// Computed in f64 so only the singular point itself is non-finite.
    pub fn contrast_factor(&self) -> f32 {
        let contrast = f64::from(self.contrast);
        let singularity = f64::from(CONTRAST_SINGULARITY);
        ((259.0 * (contrast + 255.0)) / (255.0 * (singularity - contrast))) as f32
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Apply brightness, contrast and saturation in place, in that order.
///
/// Parameters are not validated here; see [`AdjustmentParams::validate`].
pub fn adjust_in_place(mut image: ArrayViewMut3<u8>, params: AdjustmentParams) {
    let (height, width, _) = image.dim();

    let factor = params.contrast_factor();
    let saturation = 1.0 + params.saturation / 100.0;

    for y in 0..height {
        for x in 0..width {
            let mut rgb = [
                image[[y, x, 0]] as f32,
                image[[y, x, 1]] as f32,
                image[[y, x, 2]] as f32,
            ];

            for v in rgb.iter_mut() {
                *v = factor * (*v + params.brightness - 128.0) + 128.0;
            }

            let gray = luma_bt601(rgb[0], rgb[1], rgb[2]);

            for (c, v) in rgb.into_iter().enumerate() {
                image[[y, x, c]] = clamp_round_u8(gray + (v - gray) * saturation);
            }
        }
    }
}
