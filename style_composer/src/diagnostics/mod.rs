//! Read-only snapshots of a builder or scope for external logging.

use serde::Serialize;
use serde_json::Value;

use crate::declaration::Declaration;
use crate::registry::VariantRegistry;
use crate::{ComposerConfig, StyleResult, StyleResultExt};

/// Borrowed view of the props, registry and pending declarations.
///
/// Taking a snapshot never alters engine state.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a, P = ()> {
    #[serde(skip_serializing_if = "Option::is_none")]
    props: Option<&'a P>,
    config: ComposerConfig,
    registry: &'a VariantRegistry,
    declarations: &'a [Declaration],
}

impl<'a, P> Snapshot<'a, P> {
    pub(crate) const fn new(
        props: Option<&'a P>,
        config: ComposerConfig,
        registry: &'a VariantRegistry,
        declarations: &'a [Declaration],
    ) -> Self {
        Self {
            props,
            config,
            registry,
            declarations,
        }
    }

    /// Props the builder was constructed with, if any.
    #[must_use]
    pub const fn props(&self) -> Option<&'a P> {
        self.props
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> ComposerConfig {
        self.config
    }

    /// Variant entries registered so far.
    #[must_use]
    pub const fn registry(&self) -> &'a VariantRegistry {
        self.registry
    }

    /// Pending declarations in origin order.
    #[must_use]
    pub const fn declarations(&self) -> &'a [Declaration] {
        self.declarations
    }

    /// Number of pending declarations that would take part in the merge.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.declarations
            .iter()
            .filter(|record| record.is_enabled())
            .count()
    }
}

impl<P: Serialize> Snapshot<'_, P> {
    /// Render the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::Json`] when the props fail to serialise.
    pub fn to_json(&self) -> StyleResult<Value> {
        serde_json::to_value(self).into_style()
    }
}
