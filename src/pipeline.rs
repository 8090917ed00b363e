//! Filter pipeline entry points.
//!
//! The photo editor reads its canvas into a [`PixelBuffer`], picks a filter
//! (or moves the adjustment sliders) and writes the result back. This module
//! is that middle step:
//!
//! - [`Pipeline::apply_point_filter`] mutates the buffer in place
//! - [`Pipeline::apply_convolution`] returns a fresh buffer
//! - [`Pipeline::apply_adjustments`] runs brightness, contrast, saturation
//! - [`Pipeline::apply_filter`] dispatches on any [`FilterKind`]
//!
//! Every call is synchronous and keeps no reference to the buffer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::config::FilterConfig;
use crate::error::{FilterError, FilterResult};
use crate::filters::blur::box_blur_3x3_u8;
use crate::filters::color_adjust::{adjust_in_place, invert_in_place, sepia_in_place};
use crate::filters::edge::edge_detect_u8;
use crate::filters::grayscale::grayscale_in_place;
use crate::filters::sharpen::sharpen_u8;

pub use crate::filters::color_adjust::AdjustmentParams;

/// Filters offered by the photo editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Grayscale,
    Sepia,
    Invert,
    Blur,
    Sharpen,
    EdgeDetect,
}

impl FilterKind {
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Invert,
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::EdgeDetect,
    ];

    /// Name used by the editor UI.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::Sepia => "sepia",
            FilterKind::Invert => "invert",
            FilterKind::Blur => "blur",
            FilterKind::Sharpen => "sharpen",
            FilterKind::EdgeDetect => "edge",
        }
    }

    /// Output pixel depends only on the same input pixel.
    pub fn is_pointwise(self) -> bool {
        matches!(self, FilterKind::Grayscale | FilterKind::Sepia | FilterKind::Invert)
    }

    /// Output pixel depends on its 3x3 neighborhood.
    pub fn is_neighborhood(self) -> bool {
        !self.is_pointwise()
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grayscale" => Ok(FilterKind::Grayscale),
            "sepia" => Ok(FilterKind::Sepia),
            "invert" => Ok(FilterKind::Invert),
            "blur" => Ok(FilterKind::Blur),
            "sharpen" => Ok(FilterKind::Sharpen),
            "edge" | "edge_detect" | "edge-detect" => Ok(FilterKind::EdgeDetect),
            _ => Err(FilterError::UnknownFilter(s.to_string())),
        }
    }
}

/// Applies filters according to a [`FilterConfig`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: FilterConfig,
}

impl Pipeline {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Apply Grayscale, Sepia or Invert in place.
    pub fn apply_point_filter(
        &self,
        buffer: &mut PixelBuffer,
        kind: FilterKind,
    ) -> FilterResult<()> {
        log::debug!("{kind} on {}x{} buffer", buffer.width(), buffer.height());

        match kind {
            FilterKind::Grayscale => grayscale_in_place(buffer.view_mut()),
            FilterKind::Sepia => sepia_in_place(buffer.view_mut()),
            FilterKind::Invert => invert_in_place(buffer.view_mut()),
            FilterKind::Blur | FilterKind::Sharpen | FilterKind::EdgeDetect => {
                return Err(FilterError::WrongCategory {
                    kind,
                    expected: "point-wise",
                });
            }
        }
        Ok(())
    }

    /// Apply Blur, Sharpen or EdgeDetect, returning a new buffer.
    pub fn apply_convolution(
        &self,
        buffer: &PixelBuffer,
        kind: FilterKind,
    ) -> FilterResult<PixelBuffer> {
        let (width, height) = (buffer.width(), buffer.height());
        let parallel = self.config.use_parallel(width, height);
        log::debug!("{kind} on {width}x{height} buffer");
        if parallel {
            log::trace!("{kind}: sharding {} interior rows", height.saturating_sub(2));
        }

        let input = buffer.view();
        let output = match kind {
            FilterKind::Blur => box_blur_3x3_u8(input, parallel)?,
            FilterKind::Sharpen => sharpen_u8(input, self.config.sharpen_kernel, parallel)?,
            FilterKind::EdgeDetect => edge_detect_u8(input, parallel)?,
            FilterKind::Grayscale | FilterKind::Sepia | FilterKind::Invert => {
                return Err(FilterError::WrongCategory {
                    kind,
                    expected: "neighborhood",
                });
            }
        };
        PixelBuffer::from_array(output)
    }

    /// Apply any filter; point filters reuse the buffer's storage.
    pub fn apply_filter(
        &self,
        mut buffer: PixelBuffer,
        kind: FilterKind,
    ) -> FilterResult<PixelBuffer> {
        if kind.is_pointwise() {
            self.apply_point_filter(&mut buffer, kind)?;
            Ok(buffer)
        } else {
            self.apply_convolution(&buffer, kind)
        }
    }

    /// Brightness, then contrast, then saturation, then clamp.
    ///
    /// Parameters are validated first; on error the buffer is untouched.
    pub fn apply_adjustments(
        &self,
        buffer: &mut PixelBuffer,
        params: AdjustmentParams,
    ) -> FilterResult<()> {
        params.validate()?;
        log::debug!(
            "adjust brightness={} contrast={} saturation={} on {}x{} buffer",
            params.brightness,
            params.contrast,
            params.saturation,
            buffer.width(),
            buffer.height()
        );

        if !params.is_identity() {
            adjust_in_place(buffer.view_mut(), params);
        }
        Ok(())
    }
}

/// [`Pipeline::apply_point_filter`] with the default configuration.
pub fn apply_point_filter(buffer: &mut PixelBuffer, kind: FilterKind) -> FilterResult<()> {
    Pipeline::default().apply_point_filter(buffer, kind)
}

/// [`Pipeline::apply_convolution`] with the default configuration.
pub fn apply_convolution(buffer: &PixelBuffer, kind: FilterKind) -> FilterResult<PixelBuffer> {
    Pipeline::default().apply_convolution(buffer, kind)
}

/// [`Pipeline::apply_adjustments`] with the default configuration.
pub fn apply_adjustments(
    buffer: &mut PixelBuffer,
    brightness: f32,
    contrast: f32,
    saturation: f32,
) -> FilterResult<()> {
    let params = AdjustmentParams::new(brightness, contrast, saturation);
    Pipeline::default().apply_adjustments(buffer, params)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_buffer() -> impl Strategy<Value = PixelBuffer> {
        (0usize..9, 0usize..9).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<u8>(), w * h * 4)
                .prop_map(move |data| PixelBuffer::from_raw(w, h, data).unwrap())
        })
    }

    fn on_border(buffer: &PixelBuffer, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == buffer.width() - 1 || y == buffer.height() - 1
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_filters_preserve_length_and_alpha(buffer in arb_buffer()) {
            for kind in FilterKind::ALL {
                let result = Pipeline::default().apply_filter(buffer.clone(), kind).unwrap();
                prop_assert_eq!(result.len(), buffer.len());
                prop_assert_eq!(result.width(), buffer.width());
                for y in 0..buffer.height() {
                    for x in 0..buffer.width() {
                        let alpha = buffer.pixel(x, y).unwrap()[3];
                        prop_assert_eq!(result.pixel(x, y).unwrap()[3], alpha);
                    }
                }
            }
        }

        #[test]
        fn prop_invert_is_self_inverse(buffer in arb_buffer()) {
            let twice = Pipeline::default()
                .apply_filter(buffer.clone(), FilterKind::Invert)
                .and_then(|b| Pipeline::default().apply_filter(b, FilterKind::Invert))
                .unwrap();
            prop_assert_eq!(twice, buffer);
        }

        #[test]
        fn prop_grayscale_is_idempotent(buffer in arb_buffer()) {
            let once = Pipeline::default().apply_filter(buffer, FilterKind::Grayscale).unwrap();
            let twice = Pipeline::default()
                .apply_filter(once.clone(), FilterKind::Grayscale)
                .unwrap();
            prop_assert_eq!(twice, once);
        }

        #[test]
        fn prop_neighborhood_filters_keep_border(buffer in arb_buffer()) {
            for kind in [FilterKind::Blur, FilterKind::Sharpen, FilterKind::EdgeDetect] {
                let result = apply_convolution(&buffer, kind).unwrap();
                for y in 0..buffer.height() {
                    for x in 0..buffer.width() {
                        if on_border(&buffer, x, y) {
                            prop_assert_eq!(result.pixel(x, y), buffer.pixel(x, y));
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_sanitized_adjustments_always_succeed(
            buffer in arb_buffer(),
            brightness in -400.0f32..400.0,
            contrast in -400.0f32..400.0,
            saturation in -300.0f32..300.0,
        ) {
            let mut adjusted = buffer.clone();
            let params = AdjustmentParams::new(brightness, contrast, saturation).sanitized();
            prop_assert!(Pipeline::default().apply_adjustments(&mut adjusted, params).is_ok());
            prop_assert_eq!(adjusted.len(), buffer.len());
            for y in 0..buffer.height() {
                for x in 0..buffer.width() {
                    let alpha = buffer.pixel(x, y).unwrap()[3];
                    prop_assert_eq!(adjusted.pixel(x, y).unwrap()[3], alpha);
                }
            }
        }
    }
}
