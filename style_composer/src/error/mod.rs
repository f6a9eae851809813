//! Error types produced while composing styles.

mod constructors;
mod conversions;
mod types;

pub use types::StyleError;

#[cfg(test)]
mod tests;
