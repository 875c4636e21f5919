//! GPS accuracy propagation
//!
//! GPS fixes carry a 1-sigma horizontal error radius. Distances between two
//! fixes (vessel and anchor) carry the combined error of both, and a watch
//! over positions whose combined error rivals the watch radius is not worth
//! much; that condition is surfaced as a warning, never an error.

use crate::core::constants::ACCURACY_THRESHOLD_M;

/// Treat missing, non-positive and non-finite accuracies as unknown
fn known(e: Option<f64>) -> Option<f64> {
    e.filter(|v| v.is_finite() && *v > 0.0)
}

/// Root-sum-square combination of two independent Gaussian error sources
///
/// When only one accuracy is known it is returned unchanged; when neither is
/// known the combined error is unknown too.
pub fn combine_independent_errors(e1: Option<f64>, e2: Option<f64>) -> Option<f64> {
    match (known(e1), known(e2)) {
        (Some(a), Some(b)) => Some((a * a + b * b).sqrt()),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Accuracy gate for the vessel-to-anchor distance
#[derive(Debug, Clone, Copy)]
pub struct AccuracyModel {
    threshold_m: f64,
}

impl AccuracyModel {
    pub fn new(threshold_m: f64) -> Self {
        Self { threshold_m }
    }

    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }

    /// Worst acceptable combined error: the threshold applied to both the
    /// reading and the anchor fix
    pub fn combined_limit_m(&self) -> f64 {
        combine_independent_errors(Some(self.threshold_m), Some(self.threshold_m))
            .unwrap_or(self.threshold_m)
    }

    /// Whether the reading/anchor pair is too inaccurate to trust
    ///
    /// Unknown accuracies are given the benefit of the doubt.
    pub fn is_poor(&self, reading_accuracy_m: Option<f64>, anchor_accuracy_m: Option<f64>) -> bool {
        match combine_independent_errors(reading_accuracy_m, anchor_accuracy_m) {
            Some(combined) => combined > self.combined_limit_m(),
            None => false,
        }
    }
}

impl Default for AccuracyModel {
    fn default() -> Self {
        Self::new(ACCURACY_THRESHOLD_M)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_combination() {
        let combined = combine_independent_errors(Some(3.0), Some(4.0));
        assert_eq!(combined, Some(5.0));
    }

    #[test]
    fn test_single_known_error_passes_through() {
        assert_eq!(combine_independent_errors(Some(7.0), None), Some(7.0));
        assert_eq!(combine_independent_errors(None, Some(7.0)), Some(7.0));
        // Zero is not a real accuracy report, treat like unknown
        assert_eq!(combine_independent_errors(Some(7.0), Some(0.0)), Some(7.0));
    }

    #[test]
    fn test_no_known_errors() {
        assert_eq!(combine_independent_errors(None, None), None);
        assert_eq!(combine_independent_errors(Some(0.0), None), None);
        assert_eq!(combine_independent_errors(Some(f64::NAN), None), None);
    }

    #[test]
    fn test_poor_accuracy_detection() {
        let model = AccuracyModel::default();

        // Two 70 m fixes sit exactly on the limit, not over it
        assert!(!model.is_poor(Some(70.0), Some(70.0)));
        assert!(model.is_poor(Some(71.0), Some(70.0)));
        assert!(model.is_poor(Some(120.0), None));
        assert!(!model.is_poor(Some(5.0), Some(5.0)));
        assert!(!model.is_poor(None, None));
    }
}
