//! Service layer for seed-export
//!
//! Business checks that sit between loading the seed files and encoding
//! them. Nothing here modifies the seed data.

pub mod validation;

pub use validation::{Finding, SeedValidator};
