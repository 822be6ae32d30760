//! Core data models for seed-export
//!
//! This module contains the seed document types read from the JSON inputs:
//! the chart of accounts and the journal template catalog.

pub mod account;
pub mod lenient;
pub mod template;

pub use account::{Account, AccountType, ChartOfAccounts, Position};
pub use template::{JournalTemplate, TemplateCatalog, TemplateLine};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as an absent key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
