//! Declaration records: the atomic unit the merge engine consumes.
//!
//! A record pairs a body (a fragment, or a group of records rolled up from a
//! compound branch) with its weight, enabled flag, origin order and
//! provenance. Records are immutable once appended; scopes only ever push
//! new ones.

use serde::{Deserialize, Serialize};

use crate::Fragment;

/// Weight and enablement options shared by every registration operation.
///
/// # Examples
///
/// ```rust
/// use style_composer::DeclareOptions;
///
/// let opts = DeclareOptions::weight(10);
/// assert_eq!(opts.resolved_weight(0), 10);
/// assert!(opts.resolved_enabled());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeclareOptions {
    /// Merge priority; higher applies later. Defaults to the caller's fallback.
    #[serde(default)]
    pub weight: Option<i32>,
    /// Whether the declaration participates in the merge. Defaults to `true`.
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl DeclareOptions {
    /// Options with no overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weight: None,
            enabled: None,
        }
    }

    /// Options carrying only a weight.
    #[must_use]
    pub const fn weight(weight: i32) -> Self {
        Self::new().with_weight(weight)
    }

    /// Set the weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the enabled flag.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Weight to record, falling back to `default` when unset.
    #[must_use]
    pub const fn resolved_weight(&self, default: i32) -> i32 {
        match self.weight {
            Some(weight) => weight,
            None => default,
        }
    }

    /// Enabled flag to record, `true` when unset.
    #[must_use]
    pub const fn resolved_enabled(&self) -> bool {
        match self.enabled {
            Some(enabled) => enabled,
            None => true,
        }
    }
}

/// Where a declaration record came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Provenance {
    /// A fragment registered directly.
    Css,
    /// The active case of a variant.
    Variant {
        /// Variant name.
        name: String,
        /// Active value.
        value: String,
    },
    /// A registry entry pulled in by `get`.
    Lookup {
        /// Variant name.
        name: String,
        /// Requested value.
        value: String,
    },
    /// The rolled-up branch of a compound variant.
    Compound {
        /// Discriminator name.
        name: String,
        /// Active discriminator value.
        value: String,
    },
}

/// Contents of a declaration record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Body {
    /// A single style fragment.
    Fragment(Fragment),
    /// Records from a nested scope, merged as one weighted unit.
    Group(Vec<Declaration>),
}

/// A weighted, possibly disabled, style contribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Declaration {
    origin: usize,
    weight: i32,
    enabled: bool,
    provenance: Provenance,
    body: Body,
}

impl Declaration {
    pub(crate) const fn new(
        origin: usize,
        weight: i32,
        enabled: bool,
        provenance: Provenance,
        body: Body,
    ) -> Self {
        Self {
            origin,
            weight,
            enabled,
            provenance,
            body,
        }
    }

    /// Sequence index assigned when the record was appended.
    #[must_use]
    pub const fn origin(&self) -> usize {
        self.origin
    }

    /// Merge priority.
    #[must_use]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    /// Whether the record participates in the merge.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Where the record came from.
    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// The record's body.
    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    pub(crate) fn into_body(self) -> Body {
        self.body
    }

    /// Re-home the record into a parent list at `origin`, keeping it enabled
    /// only if both it and the enclosing gate are.
    pub(crate) fn rebase(self, origin: usize, gate_open: bool) -> Self {
        if gate_open {
            return Self { origin, ..self };
        }
        self.disabled_at(origin)
    }

    fn disabled_at(self, origin: usize) -> Self {
        let body = match self.body {
            Body::Group(children) => Body::Group(
                children
                    .into_iter()
                    .map(|child| {
                        let child_origin = child.origin;
                        child.disabled_at(child_origin)
                    })
                    .collect(),
            ),
            fragment @ Body::Fragment(_) => fragment,
        };
        Self {
            origin,
            enabled: false,
            body,
            ..self
        }
    }
}
