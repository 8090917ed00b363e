//! Filter modules for the photo editor.
//!
//! ## Supported Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | Red, green, blue, alpha, 0-255 |
//!
//! This is the layout of a canvas `ImageData` readback. Alpha is never
//! modified by any filter here.
//!
//! ## Filter Categories
//!
//! - **Point-wise** (in place): grayscale, sepia, invert, brightness/contrast/saturation
//! - **3x3 neighborhood** (new buffer): blur, sharpen, edge detect
//!
//! Neighborhood filters read only from their input and copy the 1-pixel
//! border through unchanged. They can shard rows across rayon; output is
//! identical either way.
//!
//! Fractional results are clamped to [0, 255] and rounded half-up.

pub mod core;
pub mod grayscale;
pub mod color_adjust;
pub mod blur;
pub mod sharpen;
pub mod edge;
