//! Regression test parameters and operations

use rectify_core::PixelBuffer;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Record failures and fail the test (default)
    #[default]
    Compare,
    /// Report failures for inspection without failing the test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything but "display" selects `Compare`
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current check
/// index, mode, and recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "rectify_identity")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable. Also
    /// installs the test log subscriber.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        crate::init_tracing();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if `|expected - actual| <= delta`, `false` otherwise. NaN
    /// never matches.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff <= delta {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        }
    }

    /// Compare two buffers, allowing each channel to differ by at most
    /// `max_channel_diff`.
    ///
    /// # Returns
    ///
    /// `true` if the sizes match and every channel is within tolerance.
    pub fn compare_buffers(
        &mut self,
        expected: &PixelBuffer,
        actual: &PixelBuffer,
        max_channel_diff: u8,
    ) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {} - size mismatch: {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let e = expected.get_rgba_unchecked(x, y).to_array();
                let a = actual.get_rgba_unchecked(x, y).to_array();
                let worst = e
                    .iter()
                    .zip(a.iter())
                    .map(|(p, q)| p.abs_diff(*q))
                    .max()
                    .unwrap_or(0);
                if worst > max_channel_diff {
                    let msg = format!(
                        "Failure in {}_reg: buffer comparison for index {} - pixel mismatch at ({}, {}): {:?} vs {:?}",
                        self.test_name, self.index, x, y, e, a
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two byte arrays for exact equality
    pub fn compare_bytes(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 == data2 {
            true
        } else {
            let first_diff = data1
                .iter()
                .zip(data2.iter())
                .position(|(a, b)| a != b);
            let msg = format!(
                "Failure in {}_reg: byte comparison for index {}\n\
                 sizes: {} vs {}, first difference at {:?}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                first_diff
            );
            self.record_failure(msg);
            false
        }
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        condition
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, or if running in display mode.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success || self.display()
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
