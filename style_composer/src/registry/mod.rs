//! Variant registry: per-scope storage of every registered variant case.
//!
//! Each variant registration records its whole value table here, not just
//! the active value, so compound compositions can later pull any case by
//! `(name, value)`. Disabled entries stay in the registry for diagnostics
//! but are invisible to [`VariantRegistry::enabled`].

mod table;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Fragment;

pub use table::{VariantCase, VariantTable};

/// A stored variant case with its resolved weight and enablement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariantEntry {
    fragment: Fragment,
    weight: i32,
    enabled: bool,
}

impl VariantEntry {
    /// Create an entry.
    #[must_use]
    pub const fn new(fragment: Fragment, weight: i32, enabled: bool) -> Self {
        Self {
            fragment,
            weight,
            enabled,
        }
    }

    /// The stored fragment.
    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Weight applied when the entry is declared.
    #[must_use]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    /// Whether the entry may contribute to a merge or a lookup.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Mapping from variant name to the entries registered under each value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariantRegistry {
    variants: BTreeMap<String, BTreeMap<String, VariantEntry>>,
}

impl VariantRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            variants: BTreeMap::new(),
        }
    }

    /// Store `entry` under `(name, value)`, replacing any previous entry.
    pub fn insert(&mut self, name: &str, value: &str, entry: VariantEntry) {
        self.variants
            .entry(name.to_owned())
            .or_default()
            .insert(value.to_owned(), entry);
    }

    /// Record every case of `table` under `name`.
    pub fn record_table(&mut self, name: &str, table: VariantTable) {
        let slot = self.variants.entry(name.to_owned()).or_default();
        for (value, entry) in table.into_entries() {
            slot.insert(value, entry);
        }
    }

    /// Look up an entry regardless of whether it is enabled.
    #[must_use]
    pub fn lookup(&self, name: &str, value: &str) -> Option<&VariantEntry> {
        self.variants.get(name)?.get(value)
    }

    /// Look up an entry only if it is enabled.
    #[must_use]
    pub fn enabled(&self, name: &str, value: &str) -> Option<&VariantEntry> {
        self.lookup(name, value).filter(|entry| entry.enabled)
    }

    /// Values registered under `name`, in key order.
    pub fn values(&self, name: &str) -> impl Iterator<Item = &str> {
        self.variants
            .get(name)
            .into_iter()
            .flat_map(|values| values.keys().map(String::as_str))
    }

    /// Number of registered variant names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` when no variant has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Fold a child scope's registry into this one.
    ///
    /// Child entries replace entries under the same key. When `gate_open` is
    /// `false` every folded entry is disabled.
    pub(crate) fn absorb(&mut self, child: Self, gate_open: bool) {
        for (name, values) in child.variants {
            let slot = self.variants.entry(name).or_default();
            for (value, entry) in values {
                let enabled = entry.enabled && gate_open;
                slot.insert(value, VariantEntry { enabled, ..entry });
            }
        }
    }
}
