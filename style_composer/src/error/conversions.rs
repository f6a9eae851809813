//! Trait-based conversions between external error types and `StyleError`.

use figment::Error as FigmentError;

use super::StyleError;

impl From<FigmentError> for StyleError {
    fn from(e: FigmentError) -> Self {
        Self::Config(e.into())
    }
}

impl From<StyleError> for FigmentError {
    /// Allow using `?` in tests that run inside a `figment::Jail`.
    fn from(e: StyleError) -> Self {
        match e {
            StyleError::Config(fe) => *fe,
            other => Self::from(other.to_string()),
        }
    }
}
