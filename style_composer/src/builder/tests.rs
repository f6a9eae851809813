//! Unit tests for builder delegation and diagnostics snapshots.

use rstest::rstest;
use serde::Serialize;
use serde_json::json;

use super::StyleBuilder;
use crate::{CompoundCases, ComposerConfig, DeclareOptions, Fragment, VariantTable};

#[derive(Debug, Serialize)]
struct ButtonProps {
    kind: &'static str,
    disabled: bool,
}

fn background_table() -> VariantTable {
    VariantTable::new()
        .case("default", Fragment::new())
        .case("primary", Fragment::new().with("background", "blue"))
}

#[rstest]
fn later_variant_overrides_base_css_on_tie() -> anyhow::Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .css(Fragment::new().with("background", "white"))
        .variant("_background", "primary", background_table())?;
    anyhow::ensure!(builder.build().into_value() == json!({"background": "blue"}));
    Ok(())
}

#[rstest]
fn heavy_css_beats_later_variant() -> anyhow::Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .css(Fragment::new().with("background", "white"))
        .variant("_background", "primary", background_table())?
        .variant(
            "_color",
            "primary",
            VariantTable::new().case("primary", Fragment::new().with("color", "white")),
        )?
        .css_with(Fragment::new().with("color", "lime"), DeclareOptions::weight(10))
        .css(Fragment::new().with("color", "black"));
    let style = builder.build();
    anyhow::ensure!(style.get("color") == Some(&json!("lime")));
    anyhow::ensure!(style.get("background") == Some(&json!("blue")));
    Ok(())
}

#[rstest]
fn snapshot_is_read_only_and_serialisable() -> anyhow::Result<()> {
    let props = ButtonProps {
        kind: "primary",
        disabled: true,
    };
    let mut builder = StyleBuilder::with_config(&props, ComposerConfig::strict());
    builder
        .css(Fragment::new().with("cursor", "pointer"))
        .when(props.disabled, |mut scope| {
            scope.css(Fragment::new().with("opacity", 0.5));
            Ok(scope.finish())
        })?
        .when(!props.disabled, |mut scope| {
            scope.css(Fragment::new().with("opacity", 1));
            Ok(scope.finish())
        })?
        .variant("_background", props.kind, background_table())?;

    let before = builder.declarations().to_vec();
    let snapshot = builder.snapshot();
    anyhow::ensure!(snapshot.declarations().len() == 4);
    anyhow::ensure!(snapshot.enabled_count() == 3);
    anyhow::ensure!(snapshot.config().strict);

    let rendered = snapshot.to_json()?;
    anyhow::ensure!(rendered["props"] == json!({"kind": "primary", "disabled": true}));
    anyhow::ensure!(rendered["config"] == json!({"strict": true}));
    anyhow::ensure!(
        rendered["registry"]["_background"]["primary"]
            == json!({"fragment": {"background": "blue"}, "weight": 0, "enabled": true})
    );
    anyhow::ensure!(
        rendered["declarations"][2]["enabled"] == json!(false),
        "gated-out record should be reported disabled: {rendered}"
    );
    anyhow::ensure!(
        rendered["declarations"][3]["provenance"]
            == json!({"kind": "variant", "name": "_background", "value": "primary"})
    );
    anyhow::ensure!(builder.declarations() == before.as_slice());

    let style = builder.build();
    anyhow::ensure!(
        style.into_value() == json!({"cursor": "pointer", "opacity": 0.5, "background": "blue"})
    );
    Ok(())
}

#[rstest]
fn compound_skips_variants_registered_in_closed_gate() -> anyhow::Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .when(false, |mut scope| {
            scope.variant(
                "_color",
                "primary",
                VariantTable::new().case("primary", Fragment::new().with("color", "white")),
            )?;
            Ok(scope.finish())
        })?
        .variant("_background", "default", background_table())?
        .compound_variant(
            "type",
            "primary",
            CompoundCases::new().case("primary", |mut scope| {
                scope
                    .get("_color", "primary")
                    .get("_background", "primary");
                Ok(scope.finish())
            }),
        )?;
    anyhow::ensure!(builder.entry("_color", "primary").is_none());
    anyhow::ensure!(builder.build().into_value() == json!({"background": "blue"}));
    Ok(())
}

#[rstest]
fn unmatched_discriminator_leaves_result_unchanged() -> anyhow::Result<()> {
    let mut baseline = StyleBuilder::new(());
    baseline.css(Fragment::new().with("color", "red"));

    let mut builder = StyleBuilder::new(());
    builder
        .css(Fragment::new().with("color", "red"))
        .compound_variant(
            "type",
            "unknown",
            CompoundCases::new().case("primary", |mut scope| {
                scope.css(Fragment::new().with("color", "blue"));
                Ok(scope.finish())
            }),
        )?;
    anyhow::ensure!(builder.build() == baseline.build());
    Ok(())
}

#[rstest]
fn root_get_declares_any_stored_value() -> anyhow::Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .variant("_background", "default", background_table())?
        .get_many("_background", ["primary", "nope"]);
    anyhow::ensure!(builder.declarations().len() == 2);
    anyhow::ensure!(builder.build().get("background") == Some(&json!("blue")));
    Ok(())
}
