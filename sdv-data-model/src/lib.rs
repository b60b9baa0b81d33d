//! Data model for the normalized farm dataset.
//!
//! This crate defines the raw record shapes read from the game's data export,
//! the normalized records written to the output dataset, the legacy category
//! codes, and the fixed category taxonomy. It performs no I/O.

pub mod categories;
pub mod legacy;
pub mod raw;
pub mod types;

pub use categories::{CategoryGroups, PrimaryCategory, SubCategory, category_groups};
pub use legacy::LegacyCategory;
pub use types::*;

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
