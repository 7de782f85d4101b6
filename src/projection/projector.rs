//! Iterative population projection
//!
//! # Mathematical Background
//!
//! Population dynamics under the Leslie model are the linear recurrence
//!
//! ```text
//! X_{k+1} = L · X_k
//! ```
//!
//! so the population after k periods is L^k · X_0. The projector
//! computes this by plain iteration (one matrix-vector product per
//! period) and stores the whole trajectory.
//!
//! # Numeric Semantics
//!
//! All arithmetic is double precision. There is no overflow handling:
//! when the dominant eigenvalue exceeds 1 the counts grow without bound,
//! and that is the honest answer of the model, not an error.

use log::debug;
use nalgebra::DVector;

use crate::demography::LeslieMatrix;
use crate::Error;

// =================================================================================================
// Projection History
// =================================================================================================

/// Trajectory of an iterative projection.
///
/// Holds `steps + 1` population vectors: element 0 is the initial
/// vector, element k equals L^k applied to it. Immutable once built.
///
/// # Example
///
/// ```rust
/// use leslie_rs::demography::LeslieMatrix;
/// use leslie_rs::projection::Projector;
/// use nalgebra::DVector;
///
/// # fn main() -> Result<(), leslie_rs::Error> {
/// let matrix = LeslieMatrix::from_slices(&[0.0, 4.0, 3.0], &[0.5, 0.25])?;
/// let initial = DVector::from_vec(vec![100.0, 100.0, 100.0]);
///
/// let history = Projector::new().project(&matrix, &initial, 2)?;
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.at(1)[0], 700.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionHistory {
    populations: Vec<DVector<f64>>,
}

impl ProjectionHistory {
    fn new(populations: Vec<DVector<f64>>) -> Self {
        debug_assert!(!populations.is_empty());
        Self { populations }
    }

    /// Number of stored periods (steps + 1, including the initial one).
    pub fn len(&self) -> usize {
        self.populations.len()
    }

    /// A history always contains at least the initial vector.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of age classes per period.
    pub fn n_classes(&self) -> usize {
        self.populations[0].len()
    }

    /// Population vector at period k.
    ///
    /// # Panics
    ///
    /// Panics when `k >= self.len()`.
    pub fn at(&self, k: usize) -> &DVector<f64> {
        &self.populations[k]
    }

    /// The initial population vector (period 0).
    pub fn initial(&self) -> &DVector<f64> {
        &self.populations[0]
    }

    /// The last projected population vector.
    pub fn final_population(&self) -> &DVector<f64> {
        self.populations.last().unwrap()
    }

    /// Total population per period (sum over age classes).
    pub fn totals(&self) -> Vec<f64> {
        self.populations.iter().map(|x| x.sum()).collect()
    }

    /// Iterate over the stored population vectors in period order.
    pub fn iter(&self) -> impl Iterator<Item = &DVector<f64>> {
        self.populations.iter()
    }
}

// =================================================================================================
// Projector
// =================================================================================================

/// Iterative Leslie projection.
///
/// # Algorithm
///
/// 1. Store the initial vector as period 0
/// 2. For each period k = 1..=steps: X_k = L · X_{k-1}
/// 3. Return the complete trajectory
///
/// Stateless; the same projector can be reused for any number of runs,
/// including concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projector;

impl Projector {
    /// Create a new projector.
    pub fn new() -> Self {
        Self
    }

    /// Project `initial` forward `steps` periods under `matrix`.
    ///
    /// `steps == 0` returns a history containing exactly the initial
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] when `initial.len()` does not
    /// match the matrix size.
    pub fn project(
        &self,
        matrix: &LeslieMatrix,
        initial: &DVector<f64>,
        steps: usize,
    ) -> Result<ProjectionHistory, Error> {
        let n = matrix.n_classes();
        if initial.len() != n {
            return Err(Error::InvalidDimension {
                what: "initial population",
                expected: n,
                actual: initial.len(),
            });
        }

        debug!("projecting {} age classes over {} periods", n, steps);

        // Reserve exact capacity to avoid reallocation during iteration
        let mut populations = Vec::with_capacity(steps + 1);
        populations.push(initial.clone());

        let mut current = initial.clone();
        for _ in 0..steps {
            current = matrix.as_matrix() * &current;
            populations.push(current.clone());
        }

        Ok(ProjectionHistory::new(populations))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
