//! Perspective rectification
//!
//! Produces a rectangular image from a quadrilateral region of a source
//! image, as if the region had been viewed head-on.
//!
//! The output is rendered by inverse mapping: a homography taking the
//! output rectangle onto the source quad is estimated once, then every
//! output pixel is mapped into the source and bilinearly sampled. Output
//! pixels that land outside the source keep the fill color.
//!
//! Rows are independent, so rasterization can optionally run in parallel.

use crate::{
    TransformError, TransformResult, projective::Homography, sample::sample_bilinear,
    size::OutputSize,
};
use rayon::prelude::*;
use rectify_core::{PixelBuffer, PixelBufferMut, Quad, Rgba, set_row_rgba};
use tracing::{debug, instrument};

/// Options for rectification
#[derive(Debug, Clone, PartialEq)]
pub struct RectifyOptions {
    /// Color of output pixels that map outside the source
    pub fill: Rgba,
    /// Rasterize rows in parallel
    pub parallel: bool,
}

impl Default for RectifyOptions {
    fn default() -> Self {
        Self {
            fill: Rgba::TRANSPARENT,
            parallel: false,
        }
    }
}

impl RectifyOptions {
    /// Create options with a specific fill color
    pub fn with_fill(fill: Rgba) -> Self {
        Self {
            fill,
            ..Default::default()
        }
    }

    /// Create options that rasterize rows in parallel
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }
}

/// Rectify the region of `source` marked by `quad` into an
/// `out_width` x `out_height` image.
///
/// The quad's corners are paired, in order, with the output corners
/// `(0, 0)`, `(out_width - 1, 0)`, `(out_width - 1, out_height - 1)`,
/// `(0, out_height - 1)`. Pixels that fall outside the source are
/// transparent black.
///
/// # Errors
///
/// - [`TransformError::InvalidParameters`] if an output dimension is 0.
/// - [`TransformError::Singular`] if the quad is degenerate. No output is
///   allocated in that case.
///
/// # Examples
///
/// ```
/// use rectify_core::{PixelBuffer, Quad, Rgba};
/// use rectify_transform::rectify;
///
/// let src = PixelBuffer::filled(100, 100, Rgba::rgb(255, 0, 0)).unwrap();
/// let quad = Quad::from_coords([(10.0, 10.0), (90.0, 20.0), (85.0, 80.0), (15.0, 90.0)]).unwrap();
/// let out = rectify(&src, &quad, 40, 30).unwrap();
/// assert_eq!((out.width(), out.height()), (40, 30));
/// assert_eq!(out.get_rgba(20, 15), Some(Rgba::rgb(255, 0, 0)));
/// ```
pub fn rectify(
    source: &PixelBuffer,
    quad: &Quad,
    out_width: u32,
    out_height: u32,
) -> TransformResult<PixelBuffer> {
    rectify_with_options(source, quad, out_width, out_height, &RectifyOptions::default())
}

/// Rectify with explicit options.
///
/// See [`rectify`].
#[instrument(level = "debug", skip(source, options), fields(src_w = source.width(), src_h = source.height()))]
pub fn rectify_with_options(
    source: &PixelBuffer,
    quad: &Quad,
    out_width: u32,
    out_height: u32,
    options: &RectifyOptions,
) -> TransformResult<PixelBuffer> {
    check_output_size(out_width, out_height)?;
    let dest = Quad::rectangle(out_width, out_height);
    let h = Homography::estimate(quad, &dest)?;
    rectify_with_homography(source, &h, out_width, out_height, options)
}

/// Rectify into an [`OutputSize`].
pub fn rectify_to_size(
    source: &PixelBuffer,
    quad: &Quad,
    size: OutputSize,
    options: &RectifyOptions,
) -> TransformResult<PixelBuffer> {
    rectify_with_options(source, quad, size.width, size.height, options)
}

/// Render an `out_width` x `out_height` image by mapping every output pixel
/// through `h` into `source`.
///
/// `h` must map output coordinates to source coordinates.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if an output dimension is 0.
pub fn rectify_with_homography(
    source: &PixelBuffer,
    h: &Homography,
    out_width: u32,
    out_height: u32,
    options: &RectifyOptions,
) -> TransformResult<PixelBuffer> {
    check_output_size(out_width, out_height)?;
    let mut out = PixelBufferMut::filled(out_width, out_height, options.fill)?;
    let stride = out.stride();

    let outside: usize = if options.parallel {
        out.data_mut()
            .par_chunks_exact_mut(stride)
            .enumerate()
            .map(|(y, row)| render_row(source, h, row, y as u32, out_width))
            .sum()
    } else {
        out.data_mut()
            .chunks_exact_mut(stride)
            .enumerate()
            .map(|(y, row)| render_row(source, h, row, y as u32, out_width))
            .sum()
    };

    debug!(out_width, out_height, outside, "rectified");
    Ok(out.into())
}

fn check_output_size(width: u32, height: u32) -> TransformResult<()> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "output size must be non-zero, got {width}x{height}"
        )));
    }
    Ok(())
}

/// Fill one output row. Returns the number of pixels left at the fill color
/// because they map outside the source.
fn render_row(source: &PixelBuffer, h: &Homography, row: &mut [u8], y: u32, width: u32) -> usize {
    let src_w = f64::from(source.width());
    let src_h = f64::from(source.height());
    let mut outside = 0;
    for x in 0..width {
        let (sx, sy) = h.apply(f64::from(x), f64::from(y));
        // Written so that NaN coordinates fail the test.
        let inside = sx >= 0.0 && sy >= 0.0 && sx < src_w && sy < src_h;
        if inside {
            set_row_rgba(row, x, sample_bilinear(source, sx, sy));
        } else {
            outside += 1;
        }
    }
    outside
}
