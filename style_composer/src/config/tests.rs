//! Unit tests for configuration decoding and environment loading.

use rstest::rstest;
use serde_json::json;
use test_helpers::figment::with_jail;

use super::ComposerConfig;
use crate::{ResultIntoFigment, StyleError};

#[rstest]
#[case::empty(json!({}), false)]
#[case::strict(json!({"strict": true}), true)]
#[case::explicit_permissive(json!({"strict": false}), false)]
fn decodes_json(#[case] value: serde_json::Value, #[case] strict: bool) -> anyhow::Result<()> {
    let cfg = ComposerConfig::from_value(value)?;
    anyhow::ensure!(cfg.strict == strict, "unexpected strict flag {}", cfg.strict);
    Ok(())
}

#[rstest]
#[case::unknown_field(json!({"strictness": 1}))]
#[case::wrong_type(json!({"strict": "yes please"}))]
fn rejects_malformed_json(#[case] value: serde_json::Value) {
    let err = ComposerConfig::from_value(value).expect_err("decoding should fail");
    assert!(matches!(&*err, StyleError::Json(_)));
}

#[rstest]
fn env_defaults_to_permissive() -> anyhow::Result<()> {
    let cfg = with_jail(|jail| {
        jail.clear_env();
        ComposerConfig::from_env().to_figment()
    })?;
    anyhow::ensure!(cfg == ComposerConfig::permissive());
    Ok(())
}

#[rstest]
fn env_enables_strict_mode() -> anyhow::Result<()> {
    let cfg = with_jail(|jail| {
        jail.clear_env();
        jail.set_env("STYLE_COMPOSER_STRICT", "true");
        ComposerConfig::from_env().to_figment()
    })?;
    anyhow::ensure!(cfg.strict, "STYLE_COMPOSER_STRICT=true should enable strict mode");
    Ok(())
}

#[rstest]
fn env_reports_extraction_failures() -> anyhow::Result<()> {
    let outcome = with_jail(|jail| {
        jail.clear_env();
        jail.set_env("STYLE_COMPOSER_STRICT", "[1, 2]");
        Ok(ComposerConfig::from_env())
    })?;
    let err = outcome.expect_err("array is not a bool");
    anyhow::ensure!(matches!(&*err, StyleError::Config(_)), "unexpected error {err:?}");
    Ok(())
}
