//! Unit tests for error construction and conversions.

use rstest::rstest;

use super::StyleError;
use crate::{ResultIntoFigment, StyleResult, StyleResultExt};

#[rstest]
#[case::invalid_fragment(
    StyleError::invalid_fragment("$.color", "string, number or object", "bool"),
    "invalid style fragment at '$.color': expected string, number or object, found bool"
)]
#[case::unknown_value(
    StyleError::unknown_variant_value("_color", "neon"),
    "variant '_color' has no case for value 'neon'"
)]
#[case::unknown_case(
    StyleError::unknown_case("type", "link"),
    "compound variant 'type' has no branch for value 'link'"
)]
#[case::scope_mismatch(
    StyleError::ScopeMismatch { expected: 4, found: 9 },
    "contribution from scope 9 returned where scope 4 was expected"
)]
fn messages_name_the_offending_input(#[case] err: StyleError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
fn figment_errors_round_trip_through_config_variant() {
    let err: StyleError = figment::Error::from("boom").into();
    assert!(matches!(err, StyleError::Config(_)));
    let back: figment::Error = err.into();
    assert_eq!(back.to_string(), "boom");
}

#[rstest]
fn into_style_wraps_json_errors() {
    let result: StyleResult<bool> = serde_json::from_str::<bool>("nope").into_style();
    let err = result.expect_err("invalid JSON");
    assert!(matches!(&*err, StyleError::Json(_)));
}

#[rstest]
fn to_figment_preserves_message() {
    let result: StyleResult<()> = Err(StyleError::unknown_case("type", "x").shared());
    let err = result.to_figment().expect_err("error expected");
    assert_eq!(
        err.to_string(),
        "compound variant 'type' has no branch for value 'x'"
    );
}
