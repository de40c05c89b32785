//! Tests for extraction pattern resolution

use metalint_core::pattern::{predefined, resolve, PatternError};

#[test]
fn test_symbolic_name_expands_to_predefined_literal() {
    let symbolic = resolve("PATH:LINE:COL:MESSAGE").unwrap();
    let literal = resolve(predefined("PATH:LINE:COL:MESSAGE").unwrap()).unwrap();
    assert_eq!(symbolic.as_str(), literal.as_str());

    let symbolic = resolve("PATH:LINE:MESSAGE").unwrap();
    let literal = resolve(predefined("PATH:LINE:MESSAGE").unwrap()).unwrap();
    assert_eq!(symbolic.as_str(), literal.as_str());
}

#[test]
fn test_literal_pattern_passes_through() {
    let pattern = r"(?P<path>[^:]+):(?P<line>\d+)\t(?P<message>.*)";
    let matcher = resolve(pattern).unwrap();
    assert_eq!(matcher.as_str(), pattern);
}

#[test]
fn test_unknown_symbolic_name_is_treated_as_literal() {
    assert!(predefined("PATH:ONLY").is_none());
    // "PATH:ONLY" compiles as a literal regex with no capture groups
    let matcher = resolve("PATH:ONLY").unwrap();
    assert_eq!(matcher.as_str(), "PATH:ONLY");
}

#[test]
fn test_path_line_col_message_matches() {
    let matcher = resolve("PATH:LINE:COL:MESSAGE").unwrap();
    let caps = matcher.captures("main.go:8:10: should omit type").unwrap();
    assert_eq!(&caps["path"], "main.go");
    assert_eq!(&caps["line"], "8");
    assert_eq!(&caps["col"], "10");
    assert_eq!(&caps["message"], "should omit type");
}

#[test]
fn test_path_line_message_matches_without_column() {
    let matcher = resolve("PATH:LINE:MESSAGE").unwrap();
    let caps = matcher
        .captures("test/stutter.go:19: missing argument for Printf")
        .unwrap();
    assert_eq!(&caps["path"], "test/stutter.go");
    assert_eq!(&caps["line"], "19");
    assert_eq!(&caps["message"], "missing argument for Printf");
    assert!(caps.name("col").is_none());
}

#[test]
fn test_subset_of_allowed_groups_is_fine() {
    assert!(resolve(r"(?P<path>\S+) (?P<line>\d+)").is_ok());
}

#[test]
fn test_unnamed_groups_are_allowed() {
    assert!(resolve(r"(\w+):(?P<path>[^:]+):(?P<line>\d+)").is_ok());
}

#[test]
fn test_unknown_named_group_is_rejected() {
    let err = resolve(r"(?P<path>[^:]+):(?P<bogus>\d+)").unwrap_err();
    match err {
        PatternError::UnknownGroup(name) => assert_eq!(name, "bogus"),
        other => panic!("expected UnknownGroup, got {:?}", other),
    }
}

#[test]
fn test_invalid_regex_is_rejected() {
    let err = resolve(r"(?P<line>[").unwrap_err();
    assert!(matches!(err, PatternError::Compile(_)));
}
