//! leslie-rs: Age-Structured Population Projection
//!
//! A small framework for deterministic discrete-time demographic
//! simulation based on the Leslie matrix model. Built with Rust for
//! performance and safety.
//!
//! # Architecture
//!
//! leslie-rs is built on two core principles:
//!
//! 1. **Separation of Demography and Numerics**
//!    - Vital rates define the model (what to project)
//!    - Projection and spectral analysis provide the methods (how)
//!
//! 2. **Strict Core, Explicit Leniency**
//!    - The core fails fast on dimension mismatches
//!    - The optional input collector corrects raw input and *records*
//!      every correction instead of silently fixing it
//!
//! # Quick Start
//!
//! ```rust
//! use leslie_rs::demography::{LeslieMatrix, VitalRates};
//! use leslie_rs::projection::{Projector, SpectralAnalyzer};
//! use nalgebra::DVector;
//!
//! # fn main() -> Result<(), leslie_rs::Error> {
//! // 1. Validate vital rates and build the Leslie matrix
//! let rates = VitalRates::new(vec![0.0, 4.0, 3.0], vec![0.5, 0.25])?;
//! let matrix = LeslieMatrix::build(&rates);
//!
//! // 2. Project the population forward 20 periods
//! let initial = DVector::from_vec(vec![100.0, 100.0, 100.0]);
//! let history = Projector::new().project(&matrix, &initial, 20)?;
//! println!("Final total: {}", history.totals().last().unwrap());
//!
//! // 3. Long-run growth rate and stable age distribution
//! let spectral = SpectralAnalyzer::new().analyze(&matrix)?;
//! println!("lambda = {:.6}", spectral.dominant_eigenvalue);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`demography`]: Vital rates and Leslie matrix construction
//! - [`projection`]: Iterative projection and spectral analysis
//! - [`input`]: Lenient collector for raw comma-separated input (optional)
//! - [`output`]: Growth interpretation and delimited-table rendering

// Core modules
pub mod demography;
pub mod projection;

pub mod input;
pub mod output;

mod error;

pub use error::Error;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use leslie_rs::prelude::*;
    //! ```
    pub use crate::demography::{LeslieMatrix, VitalRates};
    pub use crate::projection::{ProjectionHistory,
                                Projector,
                                SpectralAnalyzer,
                                SpectralResult};
    pub use crate::output::interpret::GrowthTrend;
    pub use crate::Error;
}
