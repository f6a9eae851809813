//! Property-style coverage of the merge ordering guarantees.
//!
//! Each case registers the same declarations in different orders and checks
//! which value survives for a shared key.

mod common;

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::json;
use style_composer::{DeclareOptions, Fragment, StyleBuilder, VariantTable};

use common::{frag, to_anyhow};

#[derive(Clone, Copy, Debug)]
struct Decl {
    value: &'static str,
    weight: i32,
}

const fn decl(value: &'static str, weight: i32) -> Decl {
    Decl { value, weight }
}

fn build(decls: &[Decl]) -> Fragment {
    let mut builder = StyleBuilder::new(());
    for d in decls {
        builder.css_with(
            Fragment::new().with("color", d.value),
            DeclareOptions::weight(d.weight),
        );
    }
    builder.build()
}

#[rstest]
#[case::heavy_first(vec![decl("heavy", 2), decl("light", 1)], "heavy")]
#[case::heavy_last(vec![decl("light", 1), decl("heavy", 2)], "heavy")]
#[case::heavy_middle(vec![decl("a", 0), decl("heavy", 5), decl("b", 0)], "heavy")]
#[case::equal_weights_later_wins(vec![decl("first", 1), decl("second", 1)], "second")]
#[case::three_way_tie(vec![decl("x", 0), decl("y", 0), decl("z", 0)], "z")]
#[case::negative_weights(vec![decl("base", 0), decl("sunk", -5)], "base")]
fn highest_weight_then_latest_wins(#[case] decls: Vec<Decl>, #[case] expected: &str) -> Result<()> {
    let style = build(&decls);
    ensure!(
        style.get("color") == Some(&json!(expected)),
        "expected {expected}, got {:?}",
        style.get("color")
    );
    Ok(())
}

#[rstest]
#[case::at_start(0)]
#[case::in_middle(1)]
#[case::at_end(3)]
fn empty_fragment_is_identity(#[case] position: usize) -> Result<()> {
    let decls = [decl("a", 0), decl("b", 3), decl("c", 1)];
    let baseline = build(&decls);

    let mut builder = StyleBuilder::new(());
    for (index, d) in decls.iter().enumerate() {
        if index == position {
            builder.css_with(Fragment::new(), DeclareOptions::weight(99));
        }
        builder.css_with(
            Fragment::new().with("color", d.value),
            DeclareOptions::weight(d.weight),
        );
    }
    if position >= decls.len() {
        builder.css(Fragment::new());
    }
    ensure!(builder.build() == baseline);
    Ok(())
}

#[rstest]
#[case::bold_italic(vec!["bold", "italic"])]
#[case::italic_bold(vec!["italic", "bold"])]
fn multi_value_variant_merges_every_active_case(#[case] actives: Vec<&str>) -> Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .variants(
            "_font",
            actives,
            VariantTable::new()
                .case("bold", frag(json!({"fontWeight": "bold"}))?)
                .case("italic", frag(json!({"fontStyle": "italic"}))?),
        )
        .map_err(to_anyhow)?;
    ensure!(builder.build().into_value() == json!({"fontWeight": "bold", "fontStyle": "italic"}));
    Ok(())
}

#[rstest]
#[case::active_default("default")]
#[case::active_primary("primary")]
#[case::active_ghost("ghost")]
fn get_returns_stored_fragment_regardless_of_active_value(#[case] active: &str) -> Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .variant("_color", active, common::color_table()?)
        .map_err(to_anyhow)?;
    let entry = builder
        .entry("_color", "ghost")
        .ok_or_else(|| anyhow::anyhow!("ghost entry missing"))?;
    ensure!(entry.fragment() == &frag(json!({"color": "blue", "&:hover": {"color": "navy"}}))?);
    Ok(())
}

#[rstest]
fn disabled_records_never_reach_output() -> Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .css(frag(json!({"color": "red"}))?)
        .css_with(
            frag(json!({"color": "blue", "margin": 4}))?,
            DeclareOptions::weight(100).with_enabled(false),
        )
        .when(false, |mut scope| {
            scope.css_with(Fragment::new().with("padding", 2), DeclareOptions::weight(100));
            Ok(scope.finish())
        })
        .map_err(to_anyhow)?;
    ensure!(builder.build().into_value() == json!({"color": "red"}));
    Ok(())
}

#[rstest]
fn variant_registered_later_wins_tie_with_base_css() -> Result<()> {
    let mut builder = StyleBuilder::new(());
    builder
        .css(frag(json!({"background": "white"}))?)
        .variant("_background", "primary", common::background_table()?)
        .map_err(to_anyhow)?;
    ensure!(builder.build().into_value() == json!({"background": "blue"}));
    Ok(())
}
