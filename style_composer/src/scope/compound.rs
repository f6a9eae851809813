//! Lazily evaluated branch tables for compound variants.

use std::fmt;

use crate::{DeclareOptions, StyleResult};

use super::{Contribution, Scope};

/// A branch body: builds a child scope and returns its contribution.
pub(crate) type Branch<'c> = Box<dyn FnOnce(Scope<'_>) -> StyleResult<Contribution> + 'c>;

/// Mapping from discriminator values to branch closures.
///
/// Branches are only invoked when their value is active, so inactive
/// branches never touch the registry.
///
/// # Examples
///
/// ```rust
/// use style_composer::{CompoundCases, Fragment, StyleBuilder, VariantTable};
///
/// let mut builder = StyleBuilder::new(());
/// builder.variant(
///     "_color",
///     "default",
///     VariantTable::new()
///         .case("default", Fragment::new())
///         .case("primary", Fragment::new().with("color", "white")),
/// )?;
/// builder.compound_variant(
///     "type",
///     "primary",
///     CompoundCases::new()
///         .case("primary", |mut scope| {
///             scope.get("_color", "primary");
///             Ok(scope.finish())
///         })
///         .case("secondary", |scope| Ok(scope.finish())),
/// )?;
/// let style = builder.build();
/// assert_eq!(style.get("color"), Some(&serde_json::json!("white")));
/// # Ok::<_, std::sync::Arc<style_composer::StyleError>>(())
/// ```
#[derive(Default)]
pub struct CompoundCases<'c> {
    branches: Vec<(String, Branch<'c>)>,
    options: DeclareOptions,
}

impl<'c> CompoundCases<'c> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
            options: DeclareOptions::new(),
        }
    }

    /// Add a branch for `value`. A repeated value replaces the earlier branch.
    #[must_use]
    pub fn case<F>(mut self, value: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(Scope<'_>) -> StyleResult<Contribution> + 'c,
    {
        let key: String = value.into();
        let branch: Branch<'c> = Box::new(build);
        match self.branches.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = branch,
            None => self.branches.push((key, branch)),
        }
        self
    }

    /// Weight of the group record each evaluated branch produces.
    #[must_use]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.options = self.options.with_weight(weight);
        self
    }

    /// Replace the weight and enablement applied to evaluated branches.
    #[must_use]
    pub const fn with_options(mut self, options: DeclareOptions) -> Self {
        self.options = options;
        self
    }

    /// Options applied to evaluated branches.
    #[must_use]
    pub const fn options(&self) -> DeclareOptions {
        self.options
    }

    /// Returns `true` when a branch exists for `value`.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.branches.iter().any(|(key, _)| key == value)
    }

    /// Number of branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns `true` when there are no branches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub(crate) fn take(&mut self, value: &str) -> Option<Branch<'c>> {
        let position = self.branches.iter().position(|(key, _)| key == value)?;
        Some(self.branches.remove(position).1)
    }
}

impl fmt::Debug for CompoundCases<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundCases")
            .field(
                "values",
                &self.branches.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            )
            .field("options", &self.options)
            .finish()
    }
}
