//! Quad - four ordered corners of a region to rectify
//!
//! Corners are ordered clockwise starting from the top-left logical corner:
//! top-left, top-right, bottom-right, bottom-left. The order defines which
//! corner of the output rectangle each point is paired with, so it is
//! significant even when the points are dragged past each other.
//!
//! All editing operations return a new `Quad`; nothing is mutated in place.

use crate::error::{Error, Result};
use crate::point::Point;

/// Number of corners in a quad.
pub const QUAD_CORNERS: usize = 4;

/// Relative tolerance for the collinearity test in [`Quad::is_degenerate`].
///
/// Three points are treated as collinear when the sine of the angle they
/// span at the first point is at most this value.
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Corner indices of the four point triples checked for collinearity.
const TRIPLES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Four corners, clockwise from top-left.
///
/// # Examples
///
/// ```
/// use rectify_core::Quad;
///
/// let quad = Quad::from_coords([(10.0, 12.0), (90.0, 8.0), (95.0, 70.0), (5.0, 75.0)]).unwrap();
/// assert!(!quad.is_degenerate());
/// assert_eq!(quad.flip_winding().point(2).unwrap().x, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    points: [Point; QUAD_CORNERS],
}

impl Quad {
    /// Create a quad from four points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite.
    pub fn new(points: [Point; QUAD_CORNERS]) -> Result<Self> {
        for pt in &points {
            pt.check_finite()?;
        }
        Ok(Self { points })
    }

    /// Create a quad from four `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite.
    pub fn from_coords(coords: [(f64, f64); QUAD_CORNERS]) -> Result<Self> {
        Self::new(coords.map(Point::from))
    }

    /// Corners of a `width` x `height` output canvas.
    ///
    /// The corners are the centers of the extreme pixels:
    /// `(0, 0)`, `(width - 1, 0)`, `(width - 1, height - 1)`, `(0, height - 1)`.
    /// Estimation and rasterization both rely on this exact rectangle.
    pub fn rectangle(width: u32, height: u32) -> Self {
        let right = f64::from(width) - 1.0;
        let bottom = f64::from(height) - 1.0;
        Self {
            points: [
                Point::new(0.0, 0.0),
                Point::new(right, 0.0),
                Point::new(right, bottom),
                Point::new(0.0, bottom),
            ],
        }
    }

    /// Default selection for a `width` x `height` image: each corner
    /// `margin` pixels in from the image edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] if `margin` is NaN or infinite.
    pub fn inset(width: u32, height: u32, margin: f64) -> Result<Self> {
        Point::new(margin, margin).check_finite()?;
        let w = f64::from(width);
        let h = f64::from(height);
        Ok(Self {
            points: [
                Point::new(margin, margin),
                Point::new(w - margin, margin),
                Point::new(w - margin, h - margin),
                Point::new(margin, h - margin),
            ],
        })
    }

    /// Get all four corners.
    #[inline]
    pub fn points(&self) -> &[Point; QUAD_CORNERS] {
        &self.points
    }

    /// Get a corner by index.
    ///
    /// Returns `None` if `index >= 4`.
    #[inline]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Iterate over the corners in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Return a copy with corner `index` moved to `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= 4`, or
    /// [`Error::NonFiniteCoordinate`] if the point is not finite.
    pub fn with_point(&self, index: usize, point: Point) -> Result<Self> {
        if index >= QUAD_CORNERS {
            return Err(Error::IndexOutOfBounds {
                index,
                len: QUAD_CORNERS,
            });
        }
        point.check_finite()?;
        let mut points = self.points;
        points[index] = point;
        Ok(Self { points })
    }

    /// Swap the last two corners, turning a clockwise quad into its
    /// counter-clockwise labelling and back.
    pub fn flip_winding(&self) -> Self {
        let mut points = self.points;
        points.swap(2, 3);
        Self { points }
    }

    /// Clamp every corner into `[0, width] x [0, height]`.
    pub fn clamp_to(&self, width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        Self {
            points: self
                .points
                .map(|p| Point::new(p.x.clamp(0.0, w), p.y.clamp(0.0, h))),
        }
    }

    /// Keep every corner at the same relative position after the image it
    /// was drawn on changes size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the old size has a zero side.
    pub fn rescale(&self, old_size: (u32, u32), new_size: (u32, u32)) -> Result<Self> {
        let (old_w, old_h) = old_size;
        if old_w == 0 || old_h == 0 {
            return Err(Error::InvalidDimension {
                width: old_w,
                height: old_h,
            });
        }
        let (old_w, old_h) = (f64::from(old_w), f64::from(old_h));
        let (new_w, new_h) = (f64::from(new_size.0), f64::from(new_size.1));
        Ok(Self {
            points: self
                .points
                .map(|p| Point::new(p.x / old_w * new_w, p.y / old_h * new_h)),
        })
    }

    /// Width-to-height ratio of the selection.
    ///
    /// Width is the horizontal distance between the top-left and top-right
    /// corners, height the vertical distance between the top-left and
    /// bottom-left corners. The result is infinite when the height is zero
    /// and NaN when both are zero.
    pub fn selection_aspect_ratio(&self) -> f64 {
        let [tl, tr, _, bl] = self.points;
        let width = (tr.x - tl.x).abs();
        let height = (bl.y - tl.y).abs();
        width / height
    }

    /// Whether any three corners are collinear or any two coincide.
    ///
    /// Such a quad does not determine a unique projective transform.
    pub fn is_degenerate(&self) -> bool {
        TRIPLES.iter().any(|&[a, b, c]| {
            collinear(self.points[a], self.points[b], self.points[c])
        })
    }
}

/// Collinearity test relative to the lengths of the two spanning edges.
///
/// Coincident points have a zero-length edge and always count as collinear.
fn collinear(a: Point, b: Point, c: Point) -> bool {
    let (ux, uy) = a.to(b);
    let (vx, vy) = a.to(c);
    let cross = ux * vy - uy * vx;
    cross.abs() <= DEGENERACY_TOLERANCE * a.distance(b) * a.distance(c)
}

impl TryFrom<[(f64, f64); QUAD_CORNERS]> for Quad {
    type Error = Error;

    fn try_from(coords: [(f64, f64); QUAD_CORNERS]) -> Result<Self> {
        Self::from_coords(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(coords: [(f64, f64); 4]) -> Quad {
        Quad::from_coords(coords).unwrap()
    }

    #[test]
    fn test_rectangle_corners() {
        let r = Quad::rectangle(50, 20);
        assert_eq!(
            r.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(49.0, 0.0),
                Point::new(49.0, 19.0),
                Point::new(0.0, 19.0),
            ]
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Quad::from_coords([(0.0, 0.0), (1.0, 0.0), (f64::NAN, 1.0), (0.0, 1.0)]);
        assert!(matches!(err, Err(Error::NonFiniteCoordinate { .. })));
    }

    #[test]
    fn test_flip_winding() {
        let q = quad([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let f = q.flip_winding();
        assert_eq!(f.point(2), Some(Point::new(0.0, 10.0)));
        assert_eq!(f.point(3), Some(Point::new(10.0, 10.0)));
        assert_eq!(f.flip_winding(), q);
    }

    #[test]
    fn test_with_point() {
        let q = Quad::rectangle(10, 10);
        let moved = q.with_point(1, Point::new(7.0, 2.0)).unwrap();
        assert_eq!(moved.point(1), Some(Point::new(7.0, 2.0)));
        assert_eq!(moved.point(0), q.point(0));
        assert_eq!(
            q.with_point(4, Point::default()),
            Err(Error::IndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_inset_and_clamp() {
        let q = Quad::inset(200, 100, 10.0).unwrap();
        assert_eq!(q.point(0), Some(Point::new(10.0, 10.0)));
        assert_eq!(q.point(2), Some(Point::new(190.0, 90.0)));
        assert!(matches!(
            Quad::inset(200, 100, f64::NAN),
            Err(Error::NonFiniteCoordinate { .. })
        ));
        assert!(Quad::inset(200, 100, f64::INFINITY).is_err());

        let wild = quad([(-5.0, -1.0), (250.0, 3.0), (120.0, 130.0), (4.0, 99.0)]);
        let c = wild.clamp_to(200, 100);
        assert_eq!(c.point(0), Some(Point::new(0.0, 0.0)));
        assert_eq!(c.point(1), Some(Point::new(200.0, 3.0)));
        assert_eq!(c.point(2), Some(Point::new(120.0, 100.0)));
        assert_eq!(c.point(3), Some(Point::new(4.0, 99.0)));
    }

    #[test]
    fn test_rescale() {
        let q = quad([(10.0, 20.0), (90.0, 20.0), (90.0, 80.0), (10.0, 80.0)]);
        let r = q.rescale((100, 100), (200, 50)).unwrap();
        assert_eq!(r.point(0), Some(Point::new(20.0, 10.0)));
        assert_eq!(r.point(2), Some(Point::new(180.0, 40.0)));
        assert!(q.rescale((0, 100), (10, 10)).is_err());
    }

    #[test]
    fn test_selection_aspect_ratio() {
        let q = quad([(10.0, 10.0), (110.0, 12.0), (100.0, 60.0), (12.0, 60.0)]);
        assert_eq!(q.selection_aspect_ratio(), 2.0);
        let flat = quad([(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (3.0, 0.0)]);
        assert!(flat.selection_aspect_ratio().is_infinite());
    }

    #[test]
    fn test_degenerate_collinear() {
        let q = quad([(0.0, 0.0), (50.0, 0.0), (100.0, 0.0), (0.0, 100.0)]);
        assert!(q.is_degenerate());
        let q = quad([(0.0, 0.0), (10.0, 10.0), (20.0, 20.0), (0.0, 20.0)]);
        assert!(q.is_degenerate());
    }

    #[test]
    fn test_degenerate_coincident() {
        let q = quad([(0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(q.is_degenerate());
        let q = quad([(3.0, 3.0); 4]);
        assert!(q.is_degenerate());
    }

    #[test]
    fn test_non_degenerate() {
        assert!(!Quad::rectangle(2, 2).is_degenerate());
        let q = quad([(5.0, 5.0), (35.0, 5.0), (35.0, 35.0), (5.0, 35.0)]);
        assert!(!q.is_degenerate());
        assert!(!q.flip_winding().is_degenerate());
        let skew = quad([(12.0, 7.0), (88.0, 15.0), (93.0, 81.0), (4.0, 70.0)]);
        assert!(!skew.is_degenerate());
    }

    #[test]
    fn test_single_pixel_rectangle_is_degenerate() {
        assert!(Quad::rectangle(1, 1).is_degenerate());
        assert!(Quad::rectangle(1, 10).is_degenerate());
    }
}
