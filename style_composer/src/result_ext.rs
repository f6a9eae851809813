//! Extensions for mapping errors to `StyleResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(StyleError::…(e)))`
//! patterns when converting external error types into the crate's
//! `StyleResult<T>` alias (`Result<T, Arc<StyleError>>`).
//!
//! # Examples
//!
//! ```
//! use style_composer::{StyleResult, StyleResultExt};
//!
//! fn decode() -> StyleResult<bool> {
//!     serde_json::from_str("true").into_style()
//! }
//! # assert!(decode().is_ok());
//! ```

use std::sync::Arc;

use crate::{StyleError, StyleResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<StyleError>`
/// into a `StyleResult<T>`.
pub trait StyleResultExt<T, E> {
    /// Convert `Result<T, E>` into `StyleResult<T>` using `Into<StyleError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<StyleError>`.
    fn into_style(self) -> StyleResult<T>;
}

impl<T, E> StyleResultExt<T, E> for Result<T, E>
where
    E: Into<StyleError>,
{
    fn into_style(self) -> StyleResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension to convert `StyleResult<T>` into `Result<T, figment::Error>`.
///
/// Tests running inside a `figment::Jail` must return Figment's error type;
/// this keeps `?` usable there.
#[expect(
    clippy::result_large_err,
    reason = "figment::Error is large; this helper is test-facing only"
)]
pub trait ResultIntoFigment<T> {
    /// Map the `Arc<StyleError>` error into a `figment::Error`, preserving the
    /// message text.
    ///
    /// # Errors
    ///
    /// Returns a `figment::Error` containing the original message.
    fn to_figment(self) -> Result<T, figment::Error>;
}

impl<T> ResultIntoFigment<T> for StyleResult<T> {
    fn to_figment(self) -> Result<T, figment::Error> {
        self.map_err(|err| figment::Error::from(err.to_string()))
    }
}
