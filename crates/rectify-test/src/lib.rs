//! rectify-test - Regression test framework for the rectify workspace
//!
//! Provides a regression test harness with two modes:
//!
//! - **Compare**: Record failures and fail the test (default)
//! - **Display**: Report failures without failing, for inspection
//!
//! plus deterministic synthetic images in [`patterns`].
//!
//! # Usage
//!
//! ```ignore
//! use rectify_test::RegParams;
//!
//! let mut rp = RegParams::new("rectify_identity");
//! rp.compare_values(1.0, h.coeffs()[0], 1e-12);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Log filter for the test subscriber (default "warn")

mod error;
mod params;
pub mod patterns;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
