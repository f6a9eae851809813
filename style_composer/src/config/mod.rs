//! Composer configuration.
//!
//! The only switch today is strict mode. It turns missing variant values and
//! unmatched compound discriminators into errors instead of empty
//! contributions. Configuration can be written in code, decoded from JSON,
//! or read from `STYLE_COMPOSER_*` environment variables through Figment.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{StyleResult, StyleResultExt};

/// Prefix for environment variables read by [`ComposerConfig::from_env`].
pub const ENV_PREFIX: &str = "STYLE_COMPOSER_";

/// Behavioural switches shared by a builder and all of its nested scopes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposerConfig {
    /// Reject active values and discriminators missing from their tables.
    pub strict: bool,
}

impl ComposerConfig {
    /// Permissive configuration (the default).
    #[must_use]
    pub const fn permissive() -> Self {
        Self { strict: false }
    }

    /// Strict configuration.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Decode a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::Json`] when `value` does not describe a
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use style_composer::ComposerConfig;
    /// use serde_json::json;
    ///
    /// let cfg = ComposerConfig::from_value(json!({"strict": true}))?;
    /// assert!(cfg.strict);
    /// # Ok::<_, std::sync::Arc<style_composer::StyleError>>(())
    /// ```
    pub fn from_value(value: Value) -> StyleResult<Self> {
        serde_json::from_value(value).into_style()
    }

    /// Figment layering defaults under `STYLE_COMPOSER_*` variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::Config`] when a variable cannot be
    /// extracted into the configuration.
    pub fn from_env() -> StyleResult<Self> {
        Self::figment().extract().into_style()
    }
}

#[cfg(test)]
mod tests;
