//! Helper functions and fixtures for integration tests

use leslie_rs::demography::LeslieMatrix;
use nalgebra::DVector;

/// The textbook 3-class case used across the suite.
///
/// Fecundity [0, 4, 3], survival [0.5, 0.25]. Its characteristic
/// polynomial factors as (λ − 1.5)(λ² + 1.5λ + 0.25), so the dominant
/// eigenvalue is exactly 1.5 with stable distribution [0.72, 0.24, 0.04].
pub fn textbook_matrix() -> LeslieMatrix {
    LeslieMatrix::from_slices(&[0.0, 4.0, 3.0], &[0.5, 0.25]).unwrap()
}

/// 100 individuals in every class.
pub fn textbook_population() -> DVector<f64> {
    DVector::from_vec(vec![100.0, 100.0, 100.0])
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that two vectors are close element-wise (within tolerance)
pub fn assert_vec_close(actual: &DVector<f64>, expected: &[f64], tolerance: f64, message: &str) {
    assert_eq!(actual.len(), expected.len(), "{}: dimension mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: element {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
