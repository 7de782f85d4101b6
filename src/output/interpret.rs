//! Qualitative growth interpretation
//!
//! Maps the dominant eigenvalue to the three-way label every
//! presentation layer must reproduce: λ > 1 growing, λ ≈ 1 stable
//! (within tolerance), λ < 1 declining.

use std::fmt;

/// Tolerance around 1 inside which the population counts as stable.
pub const STABILITY_TOLERANCE: f64 = 1e-6;

/// Qualitative long-run behavior of the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthTrend {
    /// λ > 1: the population grows without bound.
    Growing,
    /// |λ − 1| < tolerance: the population stabilizes.
    Stable,
    /// λ < 1: the population declines toward extinction.
    Declining,
}

impl GrowthTrend {
    /// Classify a dominant eigenvalue.
    ///
    /// The stability band is checked first, so values within
    /// [`STABILITY_TOLERANCE`] of 1 are `Stable` even though they are
    /// strictly above or below it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leslie_rs::output::interpret::GrowthTrend;
    ///
    /// assert_eq!(GrowthTrend::classify(1.5), GrowthTrend::Growing);
    /// assert_eq!(GrowthTrend::classify(1.0), GrowthTrend::Stable);
    /// assert_eq!(GrowthTrend::classify(0.8), GrowthTrend::Declining);
    /// ```
    pub fn classify(lambda: f64) -> Self {
        if (lambda - 1.0).abs() < STABILITY_TOLERANCE {
            GrowthTrend::Stable
        } else if lambda > 1.0 {
            GrowthTrend::Growing
        } else {
            GrowthTrend::Declining
        }
    }
}

impl fmt::Display for GrowthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GrowthTrend::Growing => "growing",
            GrowthTrend::Stable => "stable",
            GrowthTrend::Declining => "declining",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(GrowthTrend::classify(1.5), GrowthTrend::Growing);
        assert_eq!(GrowthTrend::classify(0.5), GrowthTrend::Declining);
        assert_eq!(GrowthTrend::classify(1.0), GrowthTrend::Stable);

        // Just inside and just outside the tolerance band.
        assert_eq!(GrowthTrend::classify(1.0 + 5e-7), GrowthTrend::Stable);
        assert_eq!(GrowthTrend::classify(1.0 - 5e-7), GrowthTrend::Stable);
        assert_eq!(GrowthTrend::classify(1.0 + 2e-6), GrowthTrend::Growing);
        assert_eq!(GrowthTrend::classify(1.0 - 2e-6), GrowthTrend::Declining);
    }

    #[test]
    fn test_zero_eigenvalue_is_declining() {
        assert_eq!(GrowthTrend::classify(0.0), GrowthTrend::Declining);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(GrowthTrend::Growing.to_string(), "growing");
        assert_eq!(GrowthTrend::Stable.to_string(), "stable");
        assert_eq!(GrowthTrend::Declining.to_string(), "declining");
    }
}
