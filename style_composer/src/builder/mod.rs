//! The style builder: a root scope plus the props it was built for.
//!
//! Registration methods mutate the builder in place and return it, so calls
//! chain. Origin order is the order of those calls; weights decide conflicts
//! first. [`StyleBuilder::build`] runs the merge engine once and returns the
//! final style object.
//!
//! # Example
//!
//! ```rust
//! use style_composer::{DeclareOptions, Fragment, StyleBuilder, VariantTable};
//! use serde_json::json;
//!
//! struct ButtonProps {
//!     background: &'static str,
//! }
//!
//! let props = ButtonProps { background: "primary" };
//! let mut builder = StyleBuilder::new(&props);
//! builder
//!     .css(Fragment::new().with("background", "white"))
//!     .variant(
//!         "_background",
//!         props.background,
//!         VariantTable::new()
//!             .case("default", Fragment::new())
//!             .case("primary", Fragment::new().with("background", "blue")),
//!     )?
//!     .css_with(Fragment::new().with("color", "lime"), DeclareOptions::weight(10));
//! let style = builder.build();
//! assert_eq!(style.into_value(), json!({"background": "blue", "color": "lime"}));
//! # Ok::<_, std::sync::Arc<style_composer::StyleError>>(())
//! ```

use crate::declaration::{Declaration, DeclareOptions};
use crate::diagnostics::Snapshot;
use crate::registry::{VariantEntry, VariantRegistry, VariantTable};
use crate::scope::{CompoundCases, Contribution, Scope};
use crate::{ComposerConfig, Fragment, StyleResult, engine};

/// Accumulates declarations for one style computation.
///
/// Props are opaque to the engine. Borrow them outside the builder when
/// closures passed to [`StyleBuilder::when`] or compound cases need them.
#[derive(Debug)]
pub struct StyleBuilder<P> {
    props: P,
    root: Scope<'static>,
}

impl<P> StyleBuilder<P> {
    /// Create a permissive builder.
    #[must_use]
    pub fn new(props: P) -> Self {
        Self::with_config(props, ComposerConfig::default())
    }

    /// Create a builder with explicit configuration.
    #[must_use]
    pub fn with_config(props: P, config: ComposerConfig) -> Self {
        Self {
            props,
            root: Scope::root(config),
        }
    }

    /// Props supplied at construction.
    #[must_use]
    pub const fn props(&self) -> &P {
        &self.props
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> ComposerConfig {
        self.root.config()
    }

    /// Variant entries registered so far.
    #[must_use]
    pub const fn registry(&self) -> &VariantRegistry {
        self.root.registry()
    }

    /// Pending declarations in origin order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        self.root.declarations()
    }

    /// Register a fragment with default weight. See [`Scope::css`].
    pub fn css(&mut self, fragment: Fragment) -> &mut Self {
        self.root.css(fragment);
        self
    }

    /// Register a weighted fragment. See [`Scope::css_with`].
    pub fn css_with(&mut self, fragment: Fragment, options: DeclareOptions) -> &mut Self {
        self.root.css_with(fragment, options);
        self
    }

    /// Register a single-value variant. See [`Scope::variant`].
    ///
    /// # Errors
    ///
    /// Strict mode only: the active value has no case.
    pub fn variant(
        &mut self,
        name: &str,
        active: &str,
        table: VariantTable,
    ) -> StyleResult<&mut Self> {
        self.root.variant(name, active, table)?;
        Ok(self)
    }

    /// Register a multi-value variant. See [`Scope::variants`].
    ///
    /// # Errors
    ///
    /// Strict mode only: an active value has no case.
    pub fn variants<I, S>(
        &mut self,
        name: &str,
        actives: I,
        table: VariantTable,
    ) -> StyleResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root.variants(name, actives, table)?;
        Ok(self)
    }

    /// Find the enabled entry for `(name, value)`. See [`Scope::entry`].
    #[must_use]
    pub fn entry(&self, name: &str, value: &str) -> Option<&VariantEntry> {
        self.root.entry(name, value)
    }

    /// Declare a stored variant fragment. See [`Scope::get`].
    pub fn get(&mut self, name: &str, value: &str) -> &mut Self {
        self.root.get(name, value);
        self
    }

    /// Declare several stored fragments. See [`Scope::get_many`].
    pub fn get_many<I, S>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root.get_many(name, values);
        self
    }

    /// Register a predicate-gated block. See [`Scope::when`].
    ///
    /// # Errors
    ///
    /// Propagates errors from `build` and scope mismatches.
    pub fn when<F>(&mut self, predicate: bool, build: F) -> StyleResult<&mut Self>
    where
        F: FnOnce(Scope<'_>) -> StyleResult<Contribution>,
    {
        self.root.when(predicate, build)?;
        Ok(self)
    }

    /// Register a compound variant. See [`Scope::compound_variant`].
    ///
    /// # Errors
    ///
    /// Propagates branch errors and scope mismatches; strict mode also
    /// rejects unmatched discriminators.
    pub fn compound_variant(
        &mut self,
        name: &str,
        active: &str,
        cases: CompoundCases<'_>,
    ) -> StyleResult<&mut Self> {
        self.root.compound_variant(name, active, cases)?;
        Ok(self)
    }

    /// Register a multi-value compound variant. See
    /// [`Scope::compound_variants`].
    ///
    /// # Errors
    ///
    /// As [`StyleBuilder::compound_variant`].
    pub fn compound_variants<I, S>(
        &mut self,
        name: &str,
        actives: I,
        cases: CompoundCases<'_>,
    ) -> StyleResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.root.compound_variants(name, actives, cases)?;
        Ok(self)
    }

    /// Borrow a read-only snapshot for logging.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, P> {
        Snapshot::new(
            Some(&self.props),
            self.root.config(),
            self.root.registry(),
            self.root.declarations(),
        )
    }

    /// Consume the builder, returning its pending declarations unmerged.
    #[must_use]
    pub fn into_declarations(self) -> Vec<Declaration> {
        self.root.into_declarations()
    }

    /// Merge all pending declarations into the final style object.
    #[must_use]
    pub fn build(self) -> Fragment {
        let records = self.into_declarations();
        tracing::debug!(records = records.len(), "building style");
        engine::resolve(records)
    }
}

#[cfg(test)]
mod tests;
