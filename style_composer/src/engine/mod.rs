//! Merge engine: turns an ordered declaration list into one style object.
//!
//! Disabled records are dropped, the rest are stable-sorted by
//! `(weight, origin)` and deep-merged in that order. Among records touching
//! the same leaf the heaviest wins, and among equal weights the one
//! registered last wins. Group records are resolved recursively at their own
//! sorted position, so a compound branch behaves as a single weighted unit.

use crate::declaration::{Body, Declaration};
use crate::Fragment;

/// Merge `records` into a fresh fragment.
///
/// # Examples
///
/// ```rust
/// use style_composer::{DeclareOptions, Fragment, StyleBuilder};
///
/// let mut builder = StyleBuilder::new(());
/// builder
///     .css_with(Fragment::new().with("color", "lime"), DeclareOptions::weight(10))
///     .css(Fragment::new().with("color", "white"));
/// let style = style_composer::engine::resolve(builder.into_declarations());
/// assert_eq!(style.get("color"), Some(&serde_json::json!("lime")));
/// ```
#[must_use]
pub fn resolve(records: Vec<Declaration>) -> Fragment {
    let mut acc = Fragment::new();
    resolve_into(&mut acc, records);
    acc
}

/// Merge `records` over an existing accumulator.
pub fn resolve_into(acc: &mut Fragment, records: Vec<Declaration>) {
    let mut active: Vec<Declaration> = records
        .into_iter()
        .filter(Declaration::is_enabled)
        .collect();
    active.sort_by_key(|record| (record.weight(), record.origin()));
    tracing::trace!(records = active.len(), "merging declarations");

    for record in active {
        match record.into_body() {
            Body::Fragment(fragment) => acc.merge(fragment),
            Body::Group(children) => resolve_into(acc, children),
        }
    }
}
