//! Tests for issue extraction from raw checker output

use metalint_core::{extract, resolve, ExtractError, Severity, ToolSpec};

fn spec(name: &str, pattern: &str) -> ToolSpec {
    ToolSpec {
        name: name.to_string(),
        command: format!("{} {{path}}", name),
        pattern: pattern.to_string(),
        message_override: None,
        severity_override: None,
    }
}

#[test]
fn test_default_pattern_yields_one_issue() {
    let spec = spec("golint", "PATH:LINE:COL:MESSAGE");
    let matcher = resolve(&spec.pattern).unwrap();

    let issues = extract(b"a.go:5:3: bad\n", &matcher, &spec).unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "a.go");
    assert_eq!(issues[0].line, 5);
    assert_eq!(issues[0].col, 3);
    assert_eq!(issues[0].message, "bad");
}

#[test]
fn test_severity_defaults_to_error() {
    let spec = spec("gotype", "PATH:LINE:COL:MESSAGE");
    let matcher = resolve(&spec.pattern).unwrap();

    let issues = extract(b"a.go:5:3: bad\n", &matcher, &spec).unwrap();
    assert_eq!(issues[0].severity, Severity::Error);
}

#[test]
fn test_severity_override_applies_to_every_issue() {
    let mut spec = spec("golint", "PATH:LINE:COL:MESSAGE");
    spec.severity_override = Some(Severity::Warning);
    let matcher = resolve(&spec.pattern).unwrap();

    let issues = extract(b"a.go:5:3: bad\nb.go:6:1: worse\n", &matcher, &spec).unwrap();

    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.severity == Severity::Warning));
}

#[test]
fn test_message_override_template() {
    let mut spec = spec("varcheck", "PATH:LINE:MESSAGE");
    spec.message_override = Some("unused global variable {message}".to_string());
    let matcher = resolve(&spec.pattern).unwrap();

    let issues = extract(b"vars.go:12: foo\n", &matcher, &spec).unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "unused global variable foo");
}

#[test]
fn test_multiple_matches_on_one_line() {
    let pattern = r"(?P<path>[a-z]+\.go):(?P<line>\d+): (?P<message>[a-z]+)";
    let spec = spec("multi", pattern);
    let matcher = resolve(pattern).unwrap();

    let issues = extract(b"a.go:1: foo b.go:2: bar\n", &matcher, &spec).unwrap();

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].path, "a.go");
    assert_eq!(issues[0].message, "foo");
    assert_eq!(issues[1].path, "b.go");
    assert_eq!(issues[1].message, "bar");
}

#[test]
fn test_noise_lines_are_skipped() {
    let spec = spec("golint", "PATH:LINE:COL:MESSAGE");
    let matcher = resolve(&spec.pattern).unwrap();

    let output = b"checking 14 files...\n\na.go:5:3: bad\ndone.\n";
    let issues = extract(output, &matcher, &spec).unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "a.go");
}

#[test]
fn test_line_order_is_preserved() {
    let spec = spec("golint", "PATH:LINE:COL:MESSAGE");
    let matcher = resolve(&spec.pattern).unwrap();

    let output = b"c.go:1:1: first\na.go:2:2: second\nb.go:3:3: third\n";
    let issues = extract(output, &matcher, &spec).unwrap();

    let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, ["c.go", "a.go", "b.go"]);
}

#[test]
fn test_missing_col_group_leaves_zero() {
    let spec = spec("vet", "PATH:LINE:MESSAGE");
    let matcher = resolve(&spec.pattern).unwrap();

    let issues = extract(b"a.go:19: missing argument\n", &matcher, &spec).unwrap();
    assert_eq!(issues[0].col, 0);
}

#[test]
fn test_unnamed_groups_are_ignored() {
    let pattern = r"(?P<path>[^:]+):(?P<line>\d+):(\d+): (?P<message>.*)";
    let spec = spec("partial", pattern);
    let matcher = resolve(pattern).unwrap();

    let issues = extract(b"a.go:5:3: bad\n", &matcher, &spec).unwrap();

    assert_eq!(issues[0].line, 5);
    // the column matched an unnamed group, so it stays unset
    assert_eq!(issues[0].col, 0);
}

#[test]
fn test_empty_message_is_allowed() {
    let spec = spec("golint", "PATH:LINE:COL:MESSAGE");
    let matcher = resolve(&spec.pattern).unwrap();

    let issues = extract(b"a.go:5:3:\n", &matcher, &spec).unwrap();
    assert_eq!(issues[0].message, "");
}

#[test]
fn test_non_numeric_line_match_is_fatal() {
    let pattern = r"(?P<path>[^:]+):(?P<line>[a-z0-9]+): (?P<message>.*)";
    let spec = spec("broken", pattern);
    let matcher = resolve(pattern).unwrap();

    let err = extract(b"a.go:xx: boom\n", &matcher, &spec).unwrap_err();
    match &err {
        ExtractError::InvalidInteger { tool, group, value } => {
            assert_eq!(tool, "broken");
            assert_eq!(*group, "line");
            assert_eq!(value, "xx");
        }
    }
    assert!(err.to_string().contains("broken"));
}

#[test]
fn test_numeric_overflow_is_fatal() {
    let spec = spec("golint", "PATH:LINE:COL:MESSAGE");
    let matcher = resolve(&spec.pattern).unwrap();

    let err = extract(b"a.go:99999999999999999999:1: big\n", &matcher, &spec).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidInteger { .. }));
}
