//! Colour to 1-bit reduction.
//!
//! Pixels are composited onto white, converted to 8-bit luma and then cut at
//! a single fixed threshold. No dithering is applied.

use crate::error::PackError;
use crate::grid::{PixelGrid, BLACK, WHITE};

/// Luma values below this become black.
pub const THRESHOLD: u8 = 128;

/// Blend one colour channel over a white background using `alpha`.
#[inline]
pub fn composite_over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// ITU-R 601-2 luma in 16.16 fixed point.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Reduce a luma value to [`BLACK`] or [`WHITE`].
#[inline]
pub fn to_mono(l: u8) -> u8 {
    if l < THRESHOLD {
        BLACK
    } else {
        WHITE
    }
}

/// Binarize an RGBA8 buffer (4 bytes per pixel, row-major).
pub fn binarize_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<PixelGrid, PackError> {
    let expected = width as usize * height as usize;
    if rgba.len() != expected * 4 {
        return Err(PackError::SampleCountMismatch {
            expected,
            actual: rgba.len() / 4,
        });
    }

    let samples = rgba
        .chunks_exact(4)
        .map(|px| {
            let a = px[3];
            let r = composite_over_white(px[0], a);
            let g = composite_over_white(px[1], a);
            let b = composite_over_white(px[2], a);
            to_mono(luma(r, g, b))
        })
        .collect();

    PixelGrid::new(width, height, samples)
}
