//! RGBA pixel buffer.
//!
//! A `PixelBuffer` is the decoded bitmap the photo editor reads back from its
//! display surface: `width * height` pixels, 4 bytes each (R, G, B, A),
//! row-major with the origin at the top-left corner.
//!
//! Internally the pixels live in an `Array3<u8>` of shape `(height, width, 4)`
//! in standard layout, so the raw bytes are exactly the canvas `ImageData`
//! order.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};

use crate::error::{FilterError, FilterResult};

/// Owned RGBA image, `len() == width * height * 4` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
}

impl PixelBuffer {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Transparent black image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array3::zeros((height, width, Self::CHANNELS)),
        }
    }

    /// Image with every pixel set to `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        let pixels = Array3::from_shape_fn((height, width, Self::CHANNELS), |(_, _, c)| rgba[c]);
        Self { pixels }
    }

    /// Wrap raw RGBA bytes.
    ///
    /// Fails if `data.len() != width * height * 4`; nothing is truncated or padded.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> FilterResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(Self::CHANNELS))
            .ok_or(FilterError::DimensionOverflow { width, height })?;

        if data.len() != expected {
            return Err(FilterError::LengthMismatch {
                width,
                height,
                len: data.len(),
                expected,
            });
        }

        let pixels = Array3::from_shape_vec((height, width, Self::CHANNELS), data)?;
        Ok(Self { pixels })
    }

    /// Wrap an `(height, width, 4)` array.
    pub fn from_array(pixels: Array3<u8>) -> FilterResult<Self> {
        let channels = pixels.dim().2;
        if channels != Self::CHANNELS {
            return Err(FilterError::UnsupportedChannels(channels));
        }

        let pixels = if pixels.is_standard_layout() {
            pixels
        } else {
            pixels.as_standard_layout().into_owned()
        };
        Ok(Self { pixels })
    }

    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Number of bytes (`width * height * 4`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = &self.pixels;
        Some([p[[y, x, 0]], p[[y, x, 1]], p[[y, x, 2]], p[[y, x, 3]]])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) -> FilterResult<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(FilterError::OutOfBounds { x, y, width, height });
        }
        for (c, value) in rgba.into_iter().enumerate() {
            self.pixels[[y, x, c]] = value;
        }
        Ok(())
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    pub fn view_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        self.pixels.view_mut()
    }

    pub fn into_array(self) -> Array3<u8> {
        self.pixels
    }

    /// Raw RGBA bytes in row-major order, exactly `len()` of them.
    pub fn into_raw(self) -> Vec<u8> {
        let len = self.len();
        if len == 0 {
            return Vec::new();
        }

        // An array sliced in place keeps the cut-off elements in its storage
        let (mut data, offset) = self.pixels.into_raw_vec_and_offset();
        let start = offset.unwrap_or(0);
        if start != 0 || data.len() != len {
            data.drain(..start);
            data.truncate(len);
        }
        data
    }
}
