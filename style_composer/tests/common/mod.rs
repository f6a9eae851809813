//! Fixtures shared by the integration tests.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use style_composer::{Fragment, StyleError, VariantTable};

/// Build a fragment from a JSON literal, surfacing validation errors.
pub fn frag(value: serde_json::Value) -> Result<Fragment> {
    Fragment::from_value(value).map_err(to_anyhow)
}

/// Convert the crate's shared error into `anyhow::Error`.
pub fn to_anyhow(err: Arc<StyleError>) -> anyhow::Error {
    anyhow!(err)
}

/// `_color` table used by the button scenarios.
pub fn color_table() -> Result<VariantTable> {
    Ok(VariantTable::new()
        .case("default", Fragment::new())
        .case("primary", frag(serde_json::json!({"color": "white"}))?)
        .case("ghost", frag(serde_json::json!({"color": "blue", "&:hover": {"color": "navy"}}))?))
}

/// `_background` table used by the button scenarios.
pub fn background_table() -> Result<VariantTable> {
    Ok(VariantTable::new()
        .case("default", Fragment::new())
        .case("primary", frag(serde_json::json!({"background": "blue"}))?)
        .case("ghost", frag(serde_json::json!({"background": "transparent"}))?))
}
