//! Common utilities for integration tests

pub mod mock_surfaces;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_surfaces::{Cylinder, FlatAnnulus};
pub use test_helpers::{
    assert_strictly_decreasing,
    gaps_to_reference,
    relative_error,
};
