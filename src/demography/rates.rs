//! Vital rates of an age-structured population
//!
//! A [`VitalRates`] value is the validated pair of fecundity and
//! survival vectors from which a Leslie matrix is built.

use nalgebra::DVector;

use crate::Error;

/// Validated fecundity and survival rates for n age classes.
///
/// # Invariants
///
/// - Fecundity has length n ≥ 1 (n ≥ 2 in practice).
/// - Survival has length exactly n − 1; entry i is the probability that
///   an individual in class i survives into class i + 1.
///
/// Range invariants (fecundity ≥ 0, survival in [0, 1]) are the input
/// collector's responsibility. The core trusts them and does not
/// re-validate; they are checked in debug builds only.
///
/// # Example
///
/// ```rust
/// use leslie_rs::demography::VitalRates;
///
/// let rates = VitalRates::new(vec![0.0, 4.0, 3.0], vec![0.5, 0.25]).unwrap();
/// assert_eq!(rates.n_classes(), 3);
///
/// // Survival must be exactly one entry shorter than fecundity.
/// assert!(VitalRates::new(vec![0.0, 4.0, 3.0], vec![0.5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VitalRates {
    fecundity: DVector<f64>,
    survival: DVector<f64>,
}

impl VitalRates {
    /// Create vital rates for `fecundity.len()` age classes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] when `fecundity` is empty or
    /// `survival.len() != fecundity.len() - 1`. The core never pads or
    /// truncates; surface caller bugs instead.
    pub fn new(fecundity: Vec<f64>, survival: Vec<f64>) -> Result<Self, Error> {
        if fecundity.is_empty() {
            return Err(Error::InvalidDimension {
                what: "fecundity rates",
                expected: 1,
                actual: 0,
            });
        }

        let n = fecundity.len();
        if survival.len() != n - 1 {
            return Err(Error::InvalidDimension {
                what: "survival rates",
                expected: n - 1,
                actual: survival.len(),
            });
        }

        debug_assert!(
            fecundity.iter().all(|&a| a >= 0.0),
            "fecundity entries must be non-negative (collector contract)"
        );
        debug_assert!(
            survival.iter().all(|&b| (0.0..=1.0).contains(&b)),
            "survival entries must lie in [0, 1] (collector contract)"
        );

        Ok(Self {
            fecundity: DVector::from_vec(fecundity),
            survival: DVector::from_vec(survival),
        })
    }

    /// Number of age classes n.
    pub fn n_classes(&self) -> usize {
        self.fecundity.len()
    }

    /// Fecundity vector (length n).
    pub fn fecundity(&self) -> &DVector<f64> {
        &self.fecundity
    }

    /// Survival vector (length n − 1).
    pub fn survival(&self) -> &DVector<f64> {
        &self.survival
    }
}

// =================================================================================================
// Tests
// =================================================================================================
