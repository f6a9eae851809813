//! Composition scopes: where declarations and variant tables accumulate.
//!
//! The root scope lives inside [`crate::StyleBuilder`]. Predicate gates and
//! compound branches open child scopes, hand them to a closure as an owned
//! value, and absorb the [`Contribution`] the closure returns from
//! [`Scope::finish`]. A child reads its ancestors' registries for
//! [`Scope::get`] but writes only to its own records and registry.
//!
//! Ownership enforces scope discipline: `finish` consumes the scope, and a
//! parent cannot be mutated or built while a child borrows it. The one
//! remaining mistake, returning a contribution that belongs to some other
//! scope, is caught at absorb time and reported as
//! [`StyleError::ScopeMismatch`].

mod compound;

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::declaration::{Body, Declaration, DeclareOptions, Provenance};
use crate::diagnostics::Snapshot;
use crate::registry::{VariantEntry, VariantRegistry, VariantTable};
use crate::{ComposerConfig, Fragment, StyleError, StyleResult};

pub use compound::CompoundCases;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

fn next_scope_id() -> u64 {
    NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Sealed output of a finished scope, ready to be absorbed by its parent.
#[derive(Debug)]
#[must_use = "a contribution must be returned to the scope that opened it"]
pub struct Contribution {
    scope: u64,
    records: Vec<Declaration>,
    registry: VariantRegistry,
}

impl Contribution {
    /// Identifier of the scope that produced this contribution.
    #[must_use]
    pub const fn scope_id(&self) -> u64 {
        self.scope
    }

    /// Records accumulated by the finished scope.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.records
    }

    /// Variant entries registered inside the finished scope.
    #[must_use]
    pub const fn registry(&self) -> &VariantRegistry {
        &self.registry
    }
}

/// An open composition scope.
#[derive(Debug)]
pub struct Scope<'a> {
    id: u64,
    parent: Option<&'a Scope<'a>>,
    config: ComposerConfig,
    registry: VariantRegistry,
    records: Vec<Declaration>,
}

impl Scope<'static> {
    /// Create a root scope.
    #[must_use]
    pub fn root(config: ComposerConfig) -> Self {
        Self {
            id: next_scope_id(),
            parent: None,
            config,
            registry: VariantRegistry::new(),
            records: Vec::new(),
        }
    }
}

impl<'a> Scope<'a> {
    fn child(parent: &'a Scope<'a>) -> Self {
        Self {
            id: next_scope_id(),
            parent: Some(parent),
            config: parent.config,
            registry: VariantRegistry::new(),
            records: Vec::new(),
        }
    }

    /// Identifier used to pair contributions with the scope that opened them.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Configuration inherited from the builder.
    #[must_use]
    pub const fn config(&self) -> ComposerConfig {
        self.config
    }

    /// Variant entries registered directly in this scope.
    #[must_use]
    pub const fn registry(&self) -> &VariantRegistry {
        &self.registry
    }

    /// Records accumulated so far, in origin order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.records
    }

    /// Borrow a read-only snapshot of this scope.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(None, self.config, &self.registry, &self.records)
    }

    /// Register a fragment with default weight.
    pub fn css(&mut self, fragment: Fragment) -> &mut Self {
        self.css_with(fragment, DeclareOptions::new())
    }

    /// Register a fragment with explicit weight or enablement.
    pub fn css_with(&mut self, fragment: Fragment, options: DeclareOptions) -> &mut Self {
        self.push(
            options.resolved_weight(0),
            options.resolved_enabled(),
            Provenance::Css,
            Body::Fragment(fragment),
        );
        self
    }

    /// Register a single-value variant.
    ///
    /// Every case of `table` is stored for later [`Scope::get`] lookups; only
    /// the case keyed by `active` is declared.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`StyleError::UnknownVariantValue`] when
    /// `active` has no case. The table is recorded either way.
    pub fn variant(
        &mut self,
        name: &str,
        active: &str,
        table: VariantTable,
    ) -> StyleResult<&mut Self> {
        let known = table.contains(active);
        self.registry.record_table(name, table);
        if known {
            self.declare_variant(name, active);
        } else {
            self.tolerate(StyleError::unknown_variant_value(name, active))?;
        }
        Ok(self)
    }

    /// Register a multi-value variant.
    ///
    /// Each case whose value appears in `actives` is declared separately, in
    /// table order; duplicates in `actives` are ignored.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`StyleError::UnknownVariantValue`] for the
    /// active values without a case. The table is recorded either way.
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
        let wanted: BTreeSet<String> = actives
            .into_iter()
            .map(|value| value.as_ref().to_owned())
            .collect();
        let selected: Vec<String> = table
            .iter()
            .filter(|(value, _)| wanted.contains(*value))
            .map(|(value, _)| value.to_owned())
            .collect();
        let missing = wanted.iter().find(|value| !table.contains(value)).cloned();

        self.registry.record_table(name, table);
        for value in &selected {
            self.declare_variant(name, value);
        }
        if let Some(value) = missing {
            self.tolerate(StyleError::unknown_variant_value(name, &value))?;
        }
        Ok(self)
    }

    /// Find the enabled registry entry for `(name, value)`.
    ///
    /// This scope's own registry shadows its ancestors'.
    #[must_use]
    pub fn entry(&self, name: &str, value: &str) -> Option<&VariantEntry> {
        self.find_entry(name, value).filter(|entry| entry.is_enabled())
    }

    /// Declare the stored fragment for `(name, value)`.
    ///
    /// Missing or disabled entries contribute nothing.
    pub fn get(&mut self, name: &str, value: &str) -> &mut Self {
        let Some(entry) = self.entry(name, value).cloned() else {
            tracing::debug!(variant = name, value, "lookup skipped: no enabled entry");
            return self;
        };
        self.push(
            entry.weight(),
            true,
            Provenance::Lookup {
                name: name.to_owned(),
                value: value.to_owned(),
            },
            Body::Fragment(entry.fragment().clone()),
        );
        self
    }

    /// Declare the stored fragments for several values of one variant, in
    /// the order given.
    pub fn get_many<I, S>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.get(name, value.as_ref());
        }
        self
    }

    /// Register a predicate-gated block.
    ///
    /// `build` receives a child scope and returns its [`Scope::finish`]
    /// output. When `predicate` is `false` every record and variant entry it
    /// produced is kept but disabled.
    ///
    /// # Errors
    ///
    /// Propagates errors from `build`, and returns
    /// [`StyleError::ScopeMismatch`] if `build` returns a contribution from a
    /// different scope.
    pub fn when<F>(&mut self, predicate: bool, build: F) -> StyleResult<&mut Self>
    where
        F: FnOnce(Scope<'_>) -> StyleResult<Contribution>,
    {
        let contribution = self.run_child(build)?;
        if !predicate {
            tracing::debug!(
                scope = contribution.scope,
                records = contribution.records.len(),
                "predicate gate closed; contributions disabled"
            );
        }
        for record in contribution.records {
            let origin = self.records.len();
            self.records.push(record.rebase(origin, predicate));
        }
        self.registry.absorb(contribution.registry, predicate);
        Ok(self)
    }

    /// Register a compound variant selected by one discriminator value.
    ///
    /// Only the branch keyed by `active` is evaluated; its records are rolled
    /// up into a single group record weighted by the cases' options.
    ///
    /// # Errors
    ///
    /// Propagates branch errors and scope mismatches. In strict mode, returns
    /// [`StyleError::UnknownCase`] when `active` has no branch.
    pub fn compound_variant(
        &mut self,
        name: &str,
        active: &str,
        mut cases: CompoundCases<'_>,
    ) -> StyleResult<&mut Self> {
        let options = cases.options();
        match cases.take(active) {
            Some(branch) => self.apply_branch(name, active, options, branch)?,
            None => self.tolerate(StyleError::unknown_case(name, active))?,
        }
        Ok(self)
    }

    /// Register a compound variant selected by several discriminator values.
    ///
    /// Matching branches are evaluated in the order of `actives`, duplicates
    /// removed, each producing its own group record.
    ///
    /// # Errors
    ///
    /// As [`Scope::compound_variant`], per active value.
    pub fn compound_variants<I, S>(
        &mut self,
        name: &str,
        actives: I,
        mut cases: CompoundCases<'_>,
    ) -> StyleResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = cases.options();
        let mut seen = BTreeSet::new();
        for active in actives {
            let value = active.as_ref();
            if !seen.insert(value.to_owned()) {
                continue;
            }
            match cases.take(value) {
                Some(branch) => self.apply_branch(name, value, options, branch)?,
                None => self.tolerate(StyleError::unknown_case(name, value))?,
            }
        }
        Ok(self)
    }

    /// Seal the scope so its parent can absorb it.
    pub fn finish(self) -> Contribution {
        Contribution {
            scope: self.id,
            records: self.records,
            registry: self.registry,
        }
    }

    pub(crate) fn into_declarations(self) -> Vec<Declaration> {
        self.records
    }

    fn find_entry(&self, name: &str, value: &str) -> Option<&VariantEntry> {
        self.registry
            .lookup(name, value)
            .or_else(|| self.parent.and_then(|parent| parent.find_entry(name, value)))
    }

    fn declare_variant(&mut self, name: &str, value: &str) {
        let Some(entry) = self.registry.lookup(name, value).cloned() else {
            return;
        };
        self.push(
            entry.weight(),
            entry.is_enabled(),
            Provenance::Variant {
                name: name.to_owned(),
                value: value.to_owned(),
            },
            Body::Fragment(entry.fragment().clone()),
        );
    }

    fn apply_branch(
        &mut self,
        name: &str,
        value: &str,
        options: DeclareOptions,
        branch: compound::Branch<'_>,
    ) -> StyleResult<()> {
        let contribution = self.run_child(branch)?;
        let enabled = options.resolved_enabled();
        self.registry.absorb(contribution.registry, enabled);
        self.push(
            options.resolved_weight(0),
            enabled,
            Provenance::Compound {
                name: name.to_owned(),
                value: value.to_owned(),
            },
            Body::Group(contribution.records),
        );
        Ok(())
    }

    fn run_child<F>(&self, build: F) -> StyleResult<Contribution>
    where
        F: FnOnce(Scope<'_>) -> StyleResult<Contribution>,
    {
        let child = Scope::child(self);
        let expected = child.id;
        let contribution = build(child)?;
        if contribution.scope != expected {
            return Err(StyleError::ScopeMismatch {
                expected,
                found: contribution.scope,
            }
            .shared());
        }
        Ok(contribution)
    }

    fn tolerate(&self, err: StyleError) -> StyleResult<()> {
        if self.config.strict {
            return Err(err.shared());
        }
        tracing::debug!(scope = self.id, "{err}; contributing nothing");
        Ok(())
    }

    fn push(&mut self, weight: i32, enabled: bool, provenance: Provenance, body: Body) {
        let origin = self.records.len();
        tracing::trace!(scope = self.id, origin, weight, enabled, "declaration appended");
        self.records
            .push(Declaration::new(origin, weight, enabled, provenance, body));
    }
}
