//! Rectify - Perspective correction for quadrilateral image regions
//!
//! Given an RGBA image and four corner points marking a quadrilateral (for
//! example a photographed document), produce a rectangular image of that
//! region as if it had been viewed head-on.
//!
//! # Overview
//!
//! - Pixel buffers, colors, points and quads ([`rectify_core`])
//! - Homography estimation, bilinear sampling and rasterization
//!   ([`transform`])
//!
//! # Example
//!
//! ```
//! use rectify::{PixelBuffer, Quad, Rgba};
//!
//! let src = PixelBuffer::filled(100, 100, Rgba::rgb(255, 0, 0)).unwrap();
//! let quad = Quad::from_coords([(0.0, 0.0), (98.0, 0.0), (98.0, 98.0), (0.0, 98.0)]).unwrap();
//! let out = rectify::transform::rectify(&src, &quad, 50, 50).unwrap();
//! assert_eq!(out.get_rgba(49, 49), Some(Rgba::rgb(255, 0, 0)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rectify_core::*;

// Re-export the transform crate as a module to avoid name conflicts
pub use rectify_transform as transform;
