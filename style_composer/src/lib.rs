//! Weighted, variant-driven composition of nested style objects.
//!
//! A [`StyleBuilder`] accumulates partial style declarations: plain
//! fragments, the active cases of variants, compound variants assembled from
//! other variants' stored cases, and predicate-gated blocks. [`StyleBuilder::build`]
//! deep-merges them into a single [`Fragment`]. Conflicts on the same key
//! are settled by weight first and registration order second.
//!
//! The crate is schema-agnostic: fragments are JSON-shaped mappings of
//! strings, numbers and nested mappings, validated only at the
//! [`Fragment::from_value`] boundary.
//!
//! ```rust
//! use style_composer::{CompoundCases, Fragment, StyleBuilder, VariantTable};
//! use serde_json::json;
//!
//! let mut builder = StyleBuilder::new(());
//! builder
//!     .variants(
//!         "_font",
//!         ["bold", "italic"],
//!         VariantTable::new()
//!             .case("bold", Fragment::new().with("fontWeight", "bold"))
//!             .case("italic", Fragment::new().with("fontStyle", "italic")),
//!     )?
//!     .when(false, |mut scope| {
//!         scope.css(Fragment::new().with("display", "none"));
//!         Ok(scope.finish())
//!     })?;
//! assert_eq!(
//!     builder.build().into_value(),
//!     json!({"fontWeight": "bold", "fontStyle": "italic"})
//! );
//! # Ok::<_, std::sync::Arc<style_composer::StyleError>>(())
//! ```

use std::sync::Arc;

mod builder;
mod config;
pub mod declaration;
pub mod diagnostics;
pub mod engine;
mod error;
pub mod fragment;
pub mod registry;
mod result_ext;
pub mod scope;

pub use builder::StyleBuilder;
pub use config::{ComposerConfig, ENV_PREFIX};
pub use declaration::{Body, Declaration, DeclareOptions, Provenance};
pub use diagnostics::Snapshot;
pub use error::StyleError;
pub use fragment::Fragment;
pub use registry::{VariantCase, VariantEntry, VariantRegistry, VariantTable};
pub use result_ext::{ResultIntoFigment, StyleResultExt};
pub use scope::{CompoundCases, Contribution, Scope};

/// Result alias used throughout the crate.
pub type StyleResult<T> = Result<T, Arc<StyleError>>;
