//! Integration tests for option extraction through the public API.

use optextract::extract::{Extract, ExtractError, OptionExtractor, OptionKind};
use optextract::{extract, render, OutputFormat};

fn raw_args(args: Vec<&str>) -> Vec<String> {
    args.into_iter().map(String::from).collect()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn lone_flag() {
    let result = extract(&raw_args(vec!["--verbose"])).unwrap();

    assert_eq!(result.extracted().len(), 1);
    assert_eq!(result.values("--verbose"), Some(&raw_args(vec!["true"])[..]));
    assert!(result.trailing().is_empty());
}

#[test]
fn lone_valued_option() {
    let result = extract(&raw_args(vec!["--name", "alice"])).unwrap();

    assert_eq!(result.extracted().len(), 1);
    assert_eq!(result.values("--name"), Some(&raw_args(vec!["alice"])[..]));
    assert!(result.trailing().is_empty());
}

#[test]
fn disable_marker_forces_trailing() {
    let result = extract(&raw_args(vec!["--name", "alice", "--", "file1", "--file2"])).unwrap();

    assert_eq!(result.extracted().len(), 1);
    assert_eq!(result.values("--name"), Some(&raw_args(vec!["alice"])[..]));
    assert_eq!(result.trailing(), &raw_args(vec!["file1", "--file2"])[..]);
}

#[test]
fn key_followed_by_plain_value_takes_it() {
    let result = extract(&raw_args(vec!["--verbose", "extra"])).unwrap();

    assert_eq!(result.values("--verbose"), Some(&raw_args(vec!["extra"])[..]));
    assert!(result.trailing().is_empty());
}

#[test]
fn flag_then_operand_after_marker() {
    let result = extract(&raw_args(vec!["--verbose", "--name", "alice", "--", "extra"])).unwrap();

    assert!(result.is_flag("--verbose"));
    assert_eq!(result.values("--verbose"), Some(&raw_args(vec!["true"])[..]));
    assert_eq!(result.trailing(), &raw_args(vec!["extra"])[..]);
}

#[test]
fn marker_right_after_key_is_its_value() {
    let result = extract(&raw_args(vec!["--verbose", "--", "extra"])).unwrap();

    assert_eq!(result.values("--verbose"), Some(&raw_args(vec!["--"])[..]));
    assert_eq!(result.trailing(), &raw_args(vec!["extra"])[..]);
}

#[test]
fn key_then_lone_marker_takes_marker_as_value() {
    let result = extract(&raw_args(vec!["-k", "--"])).unwrap();

    assert_eq!(result.values("-k"), Some(&raw_args(vec!["--"])[..]));
    assert!(result.trailing().is_empty());
    assert_eq!(
        render(&result, OutputFormat::Compact).unwrap(),
        r#"{"extracted":{"-k":["--"]},"trailing":[]}"#
    );
}

#[test]
fn key_then_bare_dash_takes_dash_as_value() {
    let result = extract(&raw_args(vec!["--input", "-"])).unwrap();

    assert_eq!(result.values("--input"), Some(&raw_args(vec!["-"])[..]));
    assert!(result.trailing().is_empty());
    assert_eq!(
        render(&result, OutputFormat::Compact).unwrap(),
        r#"{"extracted":{"--input":["-"]},"trailing":[]}"#
    );
}

#[test]
fn leading_operand_is_rejected() {
    let err = extract(&raw_args(vec!["extra", "--verbose"])).unwrap_err();

    assert_eq!(err, ExtractError::UnexpectedOperand("extra".into()));
    assert_eq!(err.token(), "extra");
}

#[test]
fn flag_reused_with_value_is_ambiguous() {
    let err = extract(&raw_args(vec!["--x", "--x", "val"])).unwrap_err();

    assert_eq!(err, ExtractError::AmbiguousOption("--x".into()));
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn any_leading_plain_value_is_unexpected_operand() {
    for first in ["extra", "-", "", "file.txt", "--"] {
        let err = extract(&raw_args(vec![first, "--flag"])).unwrap_err();
        assert_eq!(err, ExtractError::UnexpectedOperand(first.to_string()));
    }
}

#[test]
fn key_after_implicit_disable_is_unexpected_option() {
    let cases = vec![
        vec!["--a", "1", "stray", "--c"],
        vec!["-a", "1", "stray", "more", "-b"],
        vec!["--a", "1", "stray", "---"],
    ];
    for case in cases {
        let offending = case.last().unwrap().to_string();
        let err = extract(&raw_args(case)).unwrap_err();
        assert_eq!(err, ExtractError::UnexpectedOption(offending));
    }
}

#[test]
fn mixed_kinds_are_ambiguous_in_either_order() {
    let err = extract(&raw_args(vec!["-k", "-k", "v"])).unwrap_err();
    assert_eq!(err, ExtractError::AmbiguousOption("-k".into()));

    let err = extract(&raw_args(vec!["-k", "v", "-k"])).unwrap_err();
    assert_eq!(err, ExtractError::AmbiguousOption("-k".into()));

    let err = extract(&raw_args(vec!["-k", "v", "-k", "--other"])).unwrap_err();
    assert_eq!(err, ExtractError::AmbiguousOption("-k".into()));
}

#[test]
fn first_error_wins() {
    let err = extract(&raw_args(vec!["--x", "--x", "v", "stray", "--late"])).unwrap_err();
    assert_eq!(err, ExtractError::AmbiguousOption("--x".into()));
}

#[test]
fn extraction_is_deterministic() {
    let args = raw_args(vec!["--b", "2", "-a", "--b", "3", "--c", "x", "y", "--", "-z"]);

    let first = extract(&args).unwrap();
    let second = extract(&args).unwrap();

    assert_eq!(first, second);
}

#[test]
fn trailing_preserves_input_order() {
    let result = extract(&raw_args(vec!["-v", "on", "--", "z", "a", "--", "m", "-q"])).unwrap();

    assert_eq!(result.trailing(), &raw_args(vec!["z", "a", "--", "m", "-q"])[..]);
}

#[test]
fn repeated_option_accumulates_values() {
    let result = extract(&raw_args(vec!["--x", "a", "--x", "b"])).unwrap();

    assert_eq!(result.values("--x"), Some(&raw_args(vec!["a", "b"])[..]));
    assert_eq!(result.record("--x").map(|r| r.kind()), Some(OptionKind::Valued));
}

#[test]
fn repeated_flag_keeps_sentinel() {
    let result = extract(&raw_args(vec!["-v", "-v", "-v"])).unwrap();

    assert_eq!(result.values("-v"), Some(&raw_args(vec!["true"])[..]));
    assert_eq!(result.record("-v").map(|r| r.kind()), Some(OptionKind::Flag));
}

#[test]
fn short_and_long_keys_are_distinct() {
    let result = extract(&raw_args(vec!["-n", "1", "--n", "2"])).unwrap();

    assert_eq!(result.values("-n"), Some(&raw_args(vec!["1"])[..]));
    assert_eq!(result.values("--n"), Some(&raw_args(vec!["2"])[..]));
}

#[test]
fn into_parts_matches_accessors() {
    let result = extract(&raw_args(vec!["-v", "--name", "alice", "--", "f"])).unwrap();
    let expected_trailing = result.trailing().to_vec();

    let (extracted, trailing) = result.into_parts();
    assert_eq!(extracted.len(), 2);
    assert_eq!(extracted["--name"], raw_args(vec!["alice"]));
    assert_eq!(extracted["-v"], raw_args(vec!["true"]));
    assert_eq!(trailing, expected_trailing);
}

#[test]
fn extractor_via_trait() {
    let extractor = OptionExtractor::default();
    let result = extractor.extract(&raw_args(vec!["--mode", "fast"])).unwrap();

    assert_eq!(result.values("--mode"), Some(&raw_args(vec!["fast"])[..]));
}
