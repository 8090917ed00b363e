//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.601 luma coefficients, the weighting the photo editor has
//! always used for its "grayscale" button:
//!
//! `luma = 0.299 R + 0.587 G + 0.114 B`
//!
//! The result is written to R, G and B; alpha is untouched.

use ndarray::ArrayViewMut3;

use super::core::{clamp_round_u8, luma_bt601};

/// Convert an RGBA u8 image to grayscale in place.
///
/// # Arguments
/// * `image` - Mutable view of shape (height, width, 4)
pub fn grayscale_in_place(mut image: ArrayViewMut3<u8>) {
    let (height, width, _) = image.dim();

    for y in 0..height {
        for x in 0..width {
            let r = image[[y, x, 0]] as f32;
            let g = image[[y, x, 1]] as f32;
            let b = image[[y, x, 2]] as f32;

            let gray = clamp_round_u8(luma_bt601(r, g, b));

            image[[y, x, 0]] = gray;
            image[[y, x, 1]] = gray;
            image[[y, x, 2]] = gray;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_grayscale_reference_pixel() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 100;
        img[[0, 0, 1]] = 150;
        img[[0, 0, 2]] = 200;
        img[[0, 0, 3]] = 255;

        grayscale_in_place(img.view_mut());

        // 29.9 + 88.05 + 22.8 = 140.75, rounded half-up
        assert_eq!(img[[0, 0, 0]], 141);
        assert_eq!(img[[0, 0, 1]], 141);
        assert_eq!(img[[0, 0, 2]], 141);
        assert_eq!(img[[0, 0, 3]], 255);
    }

    #[test]
    fn test_grayscale_red() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 255;

        grayscale_in_place(img.view_mut());

        // 0.299 * 255 = 76.245
        assert_eq!(img[[0, 0, 0]], 76);
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let mut img = Array3::<u8>::from_elem((2, 2, 4), 128);
        img[[1, 0, 3]] = 17;

        grayscale_in_place(img.view_mut());

        assert_eq!(img[[0, 0, 3]], 128);
        assert_eq!(img[[1, 0, 3]], 17);
    }

    #[test]
    fn test_grayscale_keeps_gray_levels() {
        // Every gray level must survive a second pass unchanged
        let mut img = Array3::<u8>::zeros((1, 256, 4));
        for v in 0..256 {
            for c in 0..3 {
                img[[0, v, c]] = v as u8;
            }
        }
        let before = img.clone();

        grayscale_in_place(img.view_mut());

        assert_eq!(img, before);
    }
}
