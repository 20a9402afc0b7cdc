//! rectify-core - Basic data structures for perspective rectification
//!
//! This crate provides the data types shared by the rectify workspace:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - RGBA8 image container (immutable / mutable)
//! - [`Rgba`] - A single 8-bit-per-channel sample
//! - [`Point`] - A 2D point in pixel coordinates
//! - [`Quad`] - Four clockwise corners marking the region to rectify

pub mod buffer;
pub mod color;
pub mod error;
pub mod point;
pub mod quad;

pub use buffer::{PixelBuffer, PixelBufferMut, set_row_rgba};
pub use color::Rgba;
pub use error::{Error, Result};
pub use point::Point;
pub use quad::{DEGENERACY_TOLERANCE, QUAD_CORNERS, Quad};
