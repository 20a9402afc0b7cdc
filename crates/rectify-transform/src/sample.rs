//! Bilinear sampling of RGBA buffers
//!
//! Estimates the color at a fractional coordinate from the four nearest
//! pixels. Coordinates outside the buffer are clamped to the nearest edge
//! pixel; the buffer is never wrapped or mirrored.

use rectify_core::{PixelBuffer, Rgba, color::CHANNELS};

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp a floored coordinate into `[0, len - 1]`.
#[inline]
fn clamp_index(v: i64, len: u32) -> usize {
    v.clamp(0, i64::from(len) - 1) as usize
}

/// Store a blended channel value as a byte, rounding half to even.
#[inline]
fn to_channel(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Sample `image` at `(x, y)` with bilinear interpolation.
///
/// Each channel is blended horizontally along the two neighboring rows,
/// then vertically between those results. Integer coordinates return the
/// stored pixel exactly.
///
/// # Examples
///
/// ```
/// use rectify_core::{PixelBuffer, Rgba};
/// use rectify_transform::sample_bilinear;
///
/// let img = PixelBuffer::from_fn(2, 1, |x, _| Rgba::gray(if x == 0 { 0 } else { 200 })).unwrap();
/// assert_eq!(sample_bilinear(&img, 0.25, 0.0), Rgba::gray(50));
/// ```
pub fn sample_bilinear(image: &PixelBuffer, x: f64, y: f64) -> Rgba {
    let (w, h) = (image.width(), image.height());
    let fx = x.floor();
    let fy = y.floor();
    let xf = fx as i64;
    let yf = fy as i64;

    let x0 = clamp_index(xf, w);
    let y0 = clamp_index(yf, h);
    let x1 = clamp_index(xf.saturating_add(1), w);
    let y1 = clamp_index(yf.saturating_add(1), h);
    let tx = (x - fx).clamp(0.0, 1.0);
    let ty = (y - fy).clamp(0.0, 1.0);

    let data = image.data();
    let stride = image.stride();
    let at = |xx: usize, yy: usize| yy * stride + xx * CHANNELS;
    let (i00, i10) = (at(x0, y0), at(x1, y0));
    let (i01, i11) = (at(x0, y1), at(x1, y1));

    let mut out = [0u8; CHANNELS];
    for (c, v) in out.iter_mut().enumerate() {
        let top = lerp(f64::from(data[i00 + c]), f64::from(data[i10 + c]), tx);
        let bottom = lerp(f64::from(data[i01 + c]), f64::from(data[i11 + c]), tx);
        *v = to_channel(lerp(top, bottom, ty));
    }
    Rgba::from_array(out)
}
