//! Batch projection across independent parameter sets
//!
//! The core components share no mutable state, so distinct scenarios can
//! always run concurrently. This module packages that: hand it a slice
//! of independent cases and it projects each one, in parallel when the
//! crate is compiled with the `parallel` feature (rayon), sequentially
//! otherwise. Result order always matches input order.

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::demography::LeslieMatrix;
use crate::projection::{ProjectionHistory, Projector};
use crate::Error;

/// One independent projection scenario.
#[derive(Debug, Clone)]
pub struct ProjectionCase {
    pub matrix: LeslieMatrix,
    pub initial: DVector<f64>,
    pub steps: usize,
}

impl ProjectionCase {
    pub fn new(matrix: LeslieMatrix, initial: DVector<f64>, steps: usize) -> Self {
        Self {
            matrix,
            initial,
            steps,
        }
    }
}

/// Project every case, returning one result per case in input order.
///
/// A failing case (dimension mismatch) does not affect the others.
///
/// # Example
///
/// ```rust
/// use leslie_rs::demography::LeslieMatrix;
/// use leslie_rs::projection::batch::{project_all, ProjectionCase};
/// use nalgebra::DVector;
///
/// # fn main() -> Result<(), leslie_rs::Error> {
/// let matrix = LeslieMatrix::from_slices(&[0.0, 4.0, 3.0], &[0.5, 0.25])?;
/// let cases = vec![
///     ProjectionCase::new(matrix.clone(), DVector::from_vec(vec![100.0, 100.0, 100.0]), 10),
///     ProjectionCase::new(matrix, DVector::from_vec(vec![50.0, 0.0, 0.0]), 10),
/// ];
///
/// let results = project_all(&cases);
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| r.is_ok()));
/// # Ok(())
/// # }
/// ```
pub fn project_all(cases: &[ProjectionCase]) -> Vec<Result<ProjectionHistory, Error>> {
    let projector = Projector::new();

    #[cfg(feature = "parallel")]
    let results = cases
        .par_iter()
        .map(|case| projector.project(&case.matrix, &case.initial, case.steps))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = cases
        .iter()
        .map(|case| projector.project(&case.matrix, &case.initial, case.steps))
        .collect();

    results
}

// =================================================================================================
// Tests
// =================================================================================================
