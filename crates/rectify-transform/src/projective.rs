//! Projective transformations (homographies)
//!
//! A homography maps one plane onto another through a 3x3 matrix with the
//! bottom-right entry fixed at 1:
//!
//! ```text
//! | h0  h1  h2 |
//! | h3  h4  h5 |
//! | h6  h7  1  |
//! ```
//!
//! The image of `(x, y)` is obtained by homogeneous division:
//!
//! ```text
//! x' = (h0*x + h1*y + h2) / (h6*x + h7*y + 1)
//! y' = (h3*x + h4*y + h5) / (h6*x + h7*y + 1)
//! ```
//!
//! Four point correspondences fix the 8 free coefficients.

use crate::{TransformError, TransformResult, solve::solve_linear_system};
use rectify_core::{Point, Quad};
use tracing::{debug, instrument};

/// Projective transformation coefficients (8 values, h8 = 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homography {
    /// Coefficients [h0, h1, h2, h3, h4, h5, h6, h7]
    coeffs: [f64; 8],
}

impl Default for Homography {
    fn default() -> Self {
        Self::identity()
    }
}

impl Homography {
    /// The identity transformation
    pub const fn identity() -> Self {
        Self {
            coeffs: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Create from raw coefficients
    pub const fn from_coeffs(coeffs: [f64; 8]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients
    pub fn coeffs(&self) -> &[f64; 8] {
        &self.coeffs
    }

    /// The full 3x3 matrix, row-major, with the implicit bottom-right 1.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        let h = &self.coeffs;
        [[h[0], h[1], h[2]], [h[3], h[4], h[5]], [h[6], h[7], 1.0]]
    }

    /// Estimate the homography taking every `dst` corner onto the matching
    /// `src` corner.
    ///
    /// The result maps destination coordinates to source coordinates, so a
    /// rasterizer can look up the source location of every output pixel
    /// without inverting a matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Singular`] if either quad has three
    /// collinear or two coincident corners, or if the linear system has no
    /// unique solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use rectify_core::Quad;
    /// use rectify_transform::Homography;
    ///
    /// let src = Quad::from_coords([(0.0, 0.0), (98.0, 0.0), (98.0, 98.0), (0.0, 98.0)]).unwrap();
    /// let h = Homography::estimate(&src, &Quad::rectangle(50, 50)).unwrap();
    /// let (x, y) = h.apply(49.0, 49.0);
    /// assert!((x - 98.0).abs() < 1e-9 && (y - 98.0).abs() < 1e-9);
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn estimate(src: &Quad, dst: &Quad) -> TransformResult<Self> {
        if src.is_degenerate() || dst.is_degenerate() {
            debug!(?src, ?dst, "degenerate quad");
            return Err(TransformError::Singular);
        }

        let mut a = [[0.0; 8]; 8];
        let mut b = [0.0; 8];
        for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
            let (r1, r2) = (2 * i, 2 * i + 1);
            a[r1] = [d.x, d.y, 1.0, 0.0, 0.0, 0.0, -d.x * s.x, -d.y * s.x];
            b[r1] = s.x;
            a[r2] = [0.0, 0.0, 0.0, d.x, d.y, 1.0, -d.x * s.y, -d.y * s.y];
            b[r2] = s.y;
        }

        let coeffs = solve_linear_system(a, b)?;
        debug!(?coeffs, "estimated homography");
        Ok(Self { coeffs })
    }

    /// Map `(x, y)` through the transform.
    ///
    /// When the homogeneous divisor is zero the result is infinite or NaN;
    /// callers treat such coordinates as out of bounds.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let h = &self.coeffs;
        let xh = h[0] * x + h[1] * y + h[2];
        let yh = h[3] * x + h[4] * y + h[5];
        let w = h[6] * x + h[7] * y + 1.0;
        (xh / w, yh / w)
    }

    /// Map a point through the transform.
    #[inline]
    pub fn transform_point(&self, pt: Point) -> Point {
        let (x, y) = self.apply(pt.x, pt.y);
        Point::new(x, y)
    }
}

/// Estimate the homography mapping `dst` corners onto `src` corners.
///
/// Free-function form of [`Homography::estimate`].
pub fn estimate_homography(src: &Quad, dst: &Quad) -> TransformResult<Homography> {
    Homography::estimate(src, dst)
}
