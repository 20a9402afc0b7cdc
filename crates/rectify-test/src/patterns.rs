//! Synthetic test images
//!
//! Deterministic patterns used in place of image files, so every regression
//! test knows the exact value of every source pixel.

use crate::{TestError, TestResult};
use rectify_core::{PixelBuffer, Rgba};

/// Every pixel set to `color`.
pub fn solid(width: u32, height: u32, color: Rgba) -> TestResult<PixelBuffer> {
    PixelBuffer::filled(width, height, color).map_err(|source| TestError::Pattern {
        name: "solid",
        source,
    })
}

/// Opaque checkerboard of `cell` x `cell` squares, starting with `a` at the
/// top-left.
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    a: Rgba,
    b: Rgba,
) -> TestResult<PixelBuffer> {
    if cell == 0 {
        return Err(TestError::InvalidFixture(
            "checkerboard cell size must be non-zero".to_string(),
        ));
    }
    PixelBuffer::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
    .map_err(|source| TestError::Pattern {
        name: "checkerboard",
        source,
    })
}

/// Opaque gradient: red follows x, green follows y, blue is their sum.
///
/// Each channel is `(coordinate * step) % 256`.
pub fn gradient(width: u32, height: u32, step: u32) -> TestResult<PixelBuffer> {
    PixelBuffer::from_fn(width, height, |x, y| {
        Rgba::rgb(
            ((x * step) % 256) as u8,
            ((y * step) % 256) as u8,
            (((x + y) * step) % 256) as u8,
        )
    })
    .map_err(|source| TestError::Pattern {
        name: "gradient",
        source,
    })
}

/// Count pixels whose alpha equals `alpha`.
pub fn count_alpha(buf: &PixelBuffer, alpha: u8) -> usize {
    buf.data()
        .chunks_exact(rectify_core::color::CHANNELS)
        .filter(|px| px[rectify_core::color::ALPHA] == alpha)
        .count()
}
