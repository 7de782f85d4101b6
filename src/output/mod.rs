//! Output helpers for projection results
//!
//! The engine itself renders nothing. This module carries the two
//! externally-visible shapes a presentation layer needs:
//!
//! - **Interpretation** (`interpret`): the three-way qualitative label
//!   of the dominant eigenvalue (growing / stable / declining)
//! - **Export** (`export`): the projection history as a delimited text
//!   table (rows = periods, columns = age classes)
//!
//! Both produce in-memory values; the crate never opens files. Writing
//! the rendered table somewhere is the caller's business, via any
//! `io::Write`.

pub mod interpret;
pub mod export;

// Re-export commonly used items for convenience
pub use interpret::GrowthTrend;
pub use export::TableConfig;
