//! Issue extraction from raw checker output
//!
//! Applies a compiled matcher line by line over captured output and builds
//! [`Issue`] records from the named capture groups. Lines that match
//! nothing are expected noise (banners, summaries, blank lines) and are
//! skipped silently.

use crate::issue::{Issue, Severity};
use crate::tool::ToolSpec;
use regex::{Captures, Regex};
use thiserror::Error;

/// Placeholder expanded to the extracted message in override templates
pub const MESSAGE_PLACEHOLDER: &str = "{message}";

/// Error types for extraction.
///
/// These are configuration-class failures: a group that matched but cannot
/// be parsed means the pattern itself is broken, so the whole run aborts
/// rather than dropping issues one by one.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("tool `{tool}`: {group} matched invalid integer `{value}`")]
    InvalidInteger {
        tool: String,
        group: &'static str,
        value: String,
    },
}

/// Extract issues from `output` using `matcher`, applying the tool's
/// message and severity overrides.
///
/// Every non-overlapping match on a line yields one issue, so a tool that
/// reports several short findings per physical line produces several
/// issues. Line order is preserved within the tool's output.
pub fn extract(output: &[u8], matcher: &Regex, spec: &ToolSpec) -> Result<Vec<Issue>, ExtractError> {
    let text = String::from_utf8_lossy(output);
    let mut issues = Vec::new();

    for line in text.split('\n') {
        for caps in matcher.captures_iter(line) {
            issues.push(build_issue(&caps, spec)?);
        }
    }

    Ok(issues)
}

fn build_issue(caps: &Captures<'_>, spec: &ToolSpec) -> Result<Issue, ExtractError> {
    let mut issue = Issue {
        severity: spec.severity_override.unwrap_or(Severity::Error),
        path: String::new(),
        line: 0,
        col: 0,
        message: String::new(),
    };

    if let Some(m) = caps.name("path") {
        issue.path = m.as_str().to_string();
    }
    if let Some(m) = caps.name("line") {
        issue.line = parse_int(spec, "line", m.as_str())?;
    }
    if let Some(m) = caps.name("col") {
        issue.col = parse_int(spec, "col", m.as_str())?;
    }
    if let Some(m) = caps.name("message") {
        issue.message = m.as_str().to_string();
    }

    if let Some(template) = &spec.message_override {
        issue.message = template.replace(MESSAGE_PLACEHOLDER, &issue.message);
    }

    Ok(issue)
}

fn parse_int(spec: &ToolSpec, group: &'static str, value: &str) -> Result<u32, ExtractError> {
    value
        .parse::<u32>()
        .map_err(|_| ExtractError::InvalidInteger {
            tool: spec.name.clone(),
            group,
            value: value.to_string(),
        })
}
