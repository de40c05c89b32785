//! Tests for issue rendering

use metalint_core::{Issue, Severity};

fn issue(severity: Severity, path: &str, line: u32, col: u32, message: &str) -> Issue {
    Issue {
        severity,
        path: path.to_string(),
        line,
        col,
        message: message.to_string(),
    }
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
}

#[test]
fn test_render_with_column() {
    let issue = issue(Severity::Error, "main.go", 10, 4, "something broke");
    assert_eq!(issue.to_string(), "main.go:10:4:error: something broke");
}

#[test]
fn test_unset_column_renders_empty() {
    let issue = issue(Severity::Warning, "main.go", 10, 0, "style nit");
    assert_eq!(issue.to_string(), "main.go:10::warning: style nit");
}

#[test]
fn test_empty_message_keeps_format() {
    let issue = issue(Severity::Error, "a.go", 1, 2, "");
    assert_eq!(issue.to_string(), "a.go:1:2:error: ");
}
