//! Output size selection
//!
//! Turns a base size and an optional aspect lock into concrete output
//! dimensions for [`rectify`](crate::rectify). With the aspect lock the
//! longer side of the output gets the base size and the shorter side
//! follows the selection's width-to-height ratio.

use rectify_core::Quad;

/// Smallest base size accepted for the output's long side.
pub const MIN_OUTPUT_SIZE: u32 = 64;

/// Concrete output dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl OutputSize {
    /// Create from explicit dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Square output of `base` pixels, raised to [`MIN_OUTPUT_SIZE`].
    pub fn square(base: u32) -> Self {
        let base = base.max(MIN_OUTPUT_SIZE);
        Self::new(base, base)
    }

    /// Output dimensions for `quad`.
    ///
    /// Without `maintain_aspect` the output is a `base` x `base` square.
    /// Otherwise the ratio `|x1 - x0| / |y3 - y0|` of the quad decides the
    /// shape: wider selections keep `base` as width, taller ones keep it as
    /// height, and the other side is `base` scaled by the ratio and floored.
    /// Neither side drops below 1. An undefined ratio (a zero-sized
    /// selection) falls back to the square.
    ///
    /// # Examples
    ///
    /// ```
    /// use rectify_core::Quad;
    /// use rectify_transform::OutputSize;
    ///
    /// let quad = Quad::from_coords([(0.0, 0.0), (300.0, 0.0), (300.0, 200.0), (0.0, 200.0)]).unwrap();
    /// assert_eq!(OutputSize::for_quad(512, true, &quad), OutputSize::new(512, 341));
    /// assert_eq!(OutputSize::for_quad(512, false, &quad), OutputSize::new(512, 512));
    /// ```
    pub fn for_quad(base: u32, maintain_aspect: bool, quad: &Quad) -> Self {
        let square = Self::square(base);
        if !maintain_aspect {
            return square;
        }
        let ratio = quad.selection_aspect_ratio();
        if ratio.is_nan() {
            return square;
        }
        let base = square.width;
        let side = |v: f64| (v.floor() as u32).max(1);
        if ratio > 1.0 {
            Self::new(base, side(f64::from(base) / ratio))
        } else {
            Self::new(side(f64::from(base) * ratio), base)
        }
    }
}

impl From<(u32, u32)> for OutputSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}
