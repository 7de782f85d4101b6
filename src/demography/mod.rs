//! Demographic model definition
//!
//! This module provides the demographic side of the framework:
//! the validated vital rates of a population and the Leslie matrix
//! built from them.
//!
//! # Core Concepts
//!
//! - **Vital Rates**: per-age-class fecundity (offspring per individual
//!   per period) and survival (probability of moving to the next class)
//! - **Leslie Matrix**: the n×n projection matrix encoding those rates
//!
//! # Architecture
//!
//! The demographic model is **separate from the numerical consumers**:
//! - This module defines the **matrix** (demography)
//! - The [`projection`](crate::projection) module applies **methods**
//!   to it (iteration, spectral analysis)
//!
//! This separation allows the same matrix to feed both the iterative
//! projector and the spectral analyzer, independently and in any order.
//!
//! # Example
//!
//! ```rust
//! use leslie_rs::demography::{LeslieMatrix, VitalRates};
//!
//! # fn main() -> Result<(), leslie_rs::Error> {
//! let rates = VitalRates::new(vec![0.0, 4.0, 3.0], vec![0.5, 0.25])?;
//! let matrix = LeslieMatrix::build(&rates);
//!
//! assert_eq!(matrix.n_classes(), 3);
//! assert_eq!(matrix.as_matrix()[(1, 0)], 0.5);
//! # Ok(())
//! # }
//! ```
//!
//! # Dimension Policy
//!
//! Construction is strict: [`VitalRates::new`] fails with
//! [`Error::InvalidDimension`](crate::Error::InvalidDimension) when the
//! survival vector is not exactly one entry shorter than the fecundity
//! vector. Padding and clamping of raw user input is the job of the
//! [`input`](crate::input) collector, which corrects explicitly and
//! records what it changed.

// module declaration
pub mod rates;
pub mod leslie;

// re-export commonly used types for convenience
pub use rates::VitalRates;
pub use leslie::LeslieMatrix;
