//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{assert_vec_close, relative_error, textbook_matrix, textbook_population};
