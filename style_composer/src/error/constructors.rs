//! Constructors for `StyleError` variants used across the crate.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::StyleError;

impl StyleError {
    /// Construct an [`StyleError::InvalidFragment`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use style_composer::StyleError;
    /// let e = StyleError::invalid_fragment("$.color", "string, number or object", "bool");
    /// assert!(matches!(e, StyleError::InvalidFragment { .. }));
    /// ```
    #[must_use]
    pub fn invalid_fragment(
        path: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::InvalidFragment {
            path: path.into(),
            expected,
            found,
        }
    }

    /// Construct an [`StyleError::UnknownVariantValue`].
    #[must_use]
    pub fn unknown_variant_value(variant: &str, value: &str) -> Self {
        Self::UnknownVariantValue {
            variant: variant.to_owned(),
            value: value.to_owned(),
        }
    }

    /// Construct an [`StyleError::UnknownCase`].
    #[must_use]
    pub fn unknown_case(variant: &str, value: &str) -> Self {
        Self::UnknownCase {
            variant: variant.to_owned(),
            value: value.to_owned(),
        }
    }

    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use style_composer::StyleError;
    /// let e = StyleError::config(figment::Error::from("boom"));
    /// assert!(matches!(e, StyleError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }

    /// Wrap `self` in an [`Arc`] for use with [`crate::StyleResult`].
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
