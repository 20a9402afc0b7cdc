//! rectify-transform - Perspective rectification
//!
//! This crate turns a quadrilateral region of an image into a head-on
//! rectangular view:
//!
//! - Dense linear solving (Gauss-Jordan with partial pivoting)
//! - Homography estimation from 4 point correspondences
//! - Perspective mapping of points through a homography
//! - Bilinear sampling with clamp-to-edge boundaries
//! - Inverse-mapping rasterization of the rectified output
//! - Output size selection with an optional aspect lock

mod error;
pub mod projective;
pub mod rectify;
pub mod sample;
pub mod size;
pub mod solve;

pub use error::{TransformError, TransformResult};
pub use projective::{Homography, estimate_homography};
pub use rectify::{
    RectifyOptions, rectify, rectify_to_size, rectify_with_homography, rectify_with_options,
};
pub use sample::sample_bilinear;
pub use size::{MIN_OUTPUT_SIZE, OutputSize};
pub use solve::{PIVOT_TOLERANCE, solve_linear_system};
