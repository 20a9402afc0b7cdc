//! 2D points in pixel coordinates
//!
//! Origin at the top-left, x grows right, y grows down.

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting NaN and infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] if either coordinate is not finite.
    pub fn finite(x: f64, y: f64) -> Result<Self> {
        let pt = Self::new(x, y);
        pt.check_finite()?;
        Ok(pt)
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub(crate) fn check_finite(self) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(Error::NonFiniteCoordinate {
                x: self.x,
                y: self.y,
            })
        }
    }

    /// Vector from `self` to `other`.
    #[inline]
    pub fn to(self, other: Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let (dx, dy) = self.to(other);
        dx.hypot(dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
