//! Numerical consumers of the Leslie matrix
//!
//! This module provides the two independent numerical methods that
//! consume a [`LeslieMatrix`](crate::demography::LeslieMatrix):
//!
//! 1. **Projector** (`projector`) — WHAT the population does over time
//!    - Iterative linear recurrence X_{k+1} = L · X_k
//!    - Produces the full [`ProjectionHistory`]
//!
//! 2. **SpectralAnalyzer** (`spectral`) — WHERE it is headed
//!    - Dominant eigenvalue λ (long-run growth rate)
//!    - Normalized eigenvector (stable age distribution)
//!
//! The two consumers share no state and may run in either order or in
//! parallel; each invocation operates on its own freshly allocated data.
//!
//! # Module Organization
//!
//! - **`projector`**: [`Projector`] and [`ProjectionHistory`]
//! - **`spectral`**: [`SpectralAnalyzer`] and [`SpectralResult`]
//! - **`batch`**: projection of many independent scenarios, parallel
//!   across scenarios when the `parallel` feature is enabled
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌───────────────┐
//! │  VitalRates   │  (fecundity + survival)
//! └───────┬───────┘
//!         │
//! ┌───────▼───────┐
//! │ LeslieMatrix  │
//! └───┬───────┬───┘
//!     │       │
//! ┌───▼────┐ ┌▼─────────────────┐
//! │Projector│ │ SpectralAnalyzer │   ← independent consumers
//! └───┬────┘ └┬─────────────────┘
//!     │       │
//! ┌───▼──────┐┌▼───────────────┐
//! │Projection││ SpectralResult │
//! │ History  ││ (λ, stable v)  │
//! └──────────┘└────────────────┘
//! ```
//!
//! # Complexity
//!
//! - Projection: O(steps · n²)
//! - Spectral analysis: O(n³)
//!
//! Both complete in bounded time; there is no cancellation or timeout
//! concept.
//!
//! # Error Handling
//!
//! Both consumers return [`crate::Error`]:
//! - `InvalidDimension` when the initial vector does not match the
//!   matrix size
//! - `DecompositionFailed` when the eigen-decomposition does not
//!   converge (pathological matrices)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod projector;
mod spectral;

pub mod batch;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use projector::{ProjectionHistory, Projector};
pub use spectral::{SpectralAnalyzer, SpectralResult};
