//! Regression test parameters and comparison operations

use pictor_core::Image;
use pictor_core::pixel::PixelFormat;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed results (default)
    #[default]
    Compare,
    /// Display mode - run the pipeline, skip comparisons
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, a running comparison index, the mode and the
/// recorded failures. Construct one per `*_reg` test and finish with
/// [`RegParams::cleanup`].
pub struct RegParams {
    /// Name of the test (e.g. "resize")
    pub test_name: String,
    /// Current comparison index (incremented before each check)
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
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

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

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values within `delta`
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if self.display() {
            return true;
        }
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality
    pub fn compare_images<P: PixelFormat>(&mut self, left: &Image<P>, right: &Image<P>) -> bool {
        self.index += 1;
        if self.display() {
            return true;
        }

        if left.size() != right.size() {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        for (i, (l, r)) in left.data().iter().zip(right.data()).enumerate() {
            if l != r {
                let msg = format!(
                    "Failure in {}_reg: image comparison for index {} - pixel mismatch at {}",
                    self.test_name, self.index, i
                );
                eprintln!("{}", msg);
                self.failures.push(msg);
                self.success = false;
                return false;
            }
        }

        true
    }

    /// Compare two binary data arrays
    pub fn compare_strings(&mut self, left: &[u8], right: &[u8]) -> bool {
        self.index += 1;
        if self.display() {
            return true;
        }

        if left != right {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                left.len(),
                right.len()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all comparisons passed.
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

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::Gray;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::new("test");
        let mut a = Image::<Gray>::new(3, 3).unwrap();
        let b = a.clone();
        assert!(rp.compare_images(&a, &b));

        a.set_pixel(1, 1, Gray::new(9)).unwrap();
        assert!(!rp.compare_images(&a, &b));
        assert!(!rp.is_success());
    }
}
