//! Test helpers shared across crates.
//!
//! [`figment`] wraps `figment::Jail` for environment-dependent tests and
//! [`json`] offers small accessors for asserting on merged style objects.

pub mod figment;
pub mod json;
