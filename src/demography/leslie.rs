//! Leslie matrix construction
//!
//! # Mathematical Background
//!
//! The Leslie matrix L of an n-class population places the fecundity
//! rates a_i on its first row and the survival rates b_i on its
//! subdiagonal:
//!
//! ```text
//!     ⎡ a_0  a_1  …  a_{n-1} ⎤
//!     ⎢ b_0   0   …     0    ⎥
//! L = ⎢  0   b_1  …     0    ⎥
//!     ⎢  ⋮        ⋱     ⋮    ⎥
//!     ⎣  0    0  b_{n-2} 0   ⎦
//! ```
//!
//! One application of L advances the population vector by one period:
//! newborns enter class 0 via the fecundity row, survivors move one
//! class down via the subdiagonal, everyone else ages out.

use nalgebra::DMatrix;

use crate::demography::VitalRates;
use crate::Error;

// =================================================================================================
// Leslie Matrix
// =================================================================================================

/// The n×n projection matrix of an age-structured population.
///
/// # Invariants
///
/// - Shape is exactly n×n.
/// - Only row 0 (fecundity) and the subdiagonal entries (i+1, i)
///   (survival) may be non-zero; every other entry is 0.
///
/// Immutable once built; both the [`Projector`](crate::projection::Projector)
/// and the [`SpectralAnalyzer`](crate::projection::SpectralAnalyzer) borrow
/// it without modifying it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeslieMatrix {
    matrix: DMatrix<f64>,
}

impl LeslieMatrix {
    /// Build the Leslie matrix from validated vital rates.
    ///
    /// Allocates an n×n zero matrix, sets row 0 to the fecundity vector
    /// and entry (i+1, i) to survival[i] for i in [0, n−2]. No other
    /// entries are touched. Pure and deterministic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use leslie_rs::demography::{LeslieMatrix, VitalRates};
    ///
    /// let rates = VitalRates::new(vec![0.0, 4.0, 3.0], vec![0.5, 0.25]).unwrap();
    /// let leslie = LeslieMatrix::build(&rates);
    ///
    /// let m = leslie.as_matrix();
    /// assert_eq!(m[(0, 1)], 4.0);
    /// assert_eq!(m[(2, 1)], 0.25);
    /// assert_eq!(m[(2, 2)], 0.0);
    /// ```
    pub fn build(rates: &VitalRates) -> Self {
        let n = rates.n_classes();
        let mut matrix = DMatrix::zeros(n, n);

        for (j, &a) in rates.fecundity().iter().enumerate() {
            matrix[(0, j)] = a;
        }
        for (i, &b) in rates.survival().iter().enumerate() {
            matrix[(i + 1, i)] = b;
        }

        Self { matrix }
    }

    /// Convenience: validate the two rate slices and build in one call.
    ///
    /// # Errors
    ///
    /// Same dimension checks as [`VitalRates::new`].
    pub fn from_slices(fecundity: &[f64], survival: &[f64]) -> Result<Self, Error> {
        let rates = VitalRates::new(fecundity.to_vec(), survival.to_vec())?;
        Ok(Self::build(&rates))
    }

    /// Number of age classes n (the matrix is n×n).
    pub fn n_classes(&self) -> usize {
        self.matrix.nrows()
    }

    /// Borrow the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}

impl std::fmt::Display for LeslieMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LeslieMatrix [{0} * {0}]", self.n_classes())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
