//! Primary error enum for style composition flows.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while composing a style object.
///
/// Missing variant values and unmatched compound cases are only reported
/// when strict mode is enabled; the permissive default treats them as empty
/// contributions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyleError {
    /// A value handed to the fragment boundary is not a style mapping.
    #[error("invalid style fragment at '{path}': expected {expected}, found {found}")]
    InvalidFragment {
        /// Dotted path to the offending value (`$` for the root).
        path: String,
        /// Shape the boundary accepts at this position.
        expected: &'static str,
        /// JSON kind that was supplied instead.
        found: &'static str,
    },

    /// The active value of a variant has no entry in its table.
    #[error("variant '{variant}' has no case for value '{value}'")]
    UnknownVariantValue {
        /// Variant name.
        variant: String,
        /// Requested active value.
        value: String,
    },

    /// The active discriminator of a compound variant has no branch.
    #[error("compound variant '{variant}' has no branch for value '{value}'")]
    UnknownCase {
        /// Discriminator name.
        variant: String,
        /// Requested discriminator value.
        value: String,
    },

    /// A contribution was absorbed by a scope other than its parent.
    #[error("contribution from scope {found} returned where scope {expected} was expected")]
    ScopeMismatch {
        /// Identifier of the child scope the parent opened.
        expected: u64,
        /// Identifier carried by the returned contribution.
        found: u64,
    },

    /// Error while extracting composer configuration.
    #[error("Failed to load composer configuration: {0}")]
    Config(#[from] Box<FigmentError>),

    /// Error decoding a JSON configuration value.
    #[error("Failed to decode composer configuration: {0}")]
    Json(#[from] serde_json::Error),
}
