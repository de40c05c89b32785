//! Extraction pattern resolution
//!
//! A tool's pattern is either a symbolic name for one of the predefined
//! patterns below, or a literal regex. Named capture groups identify the
//! structured fields; anything outside the allowed set is a configuration
//! error surfaced at startup, before any tool runs.

use regex::Regex;
use thiserror::Error;

/// Predefined symbolic patterns, usable anywhere a literal pattern is.
///
/// The path segment matches any run of non-colon characters, line/col are
/// runs of digits, and the message is the remainder of the line.
const PREDEFINED: &[(&str, &str)] = &[
    (
        "PATH:LINE:COL:MESSAGE",
        r"(?P<path>[^:]+):(?P<line>\d+):(?P<col>\d+):\s*(?P<message>.*)",
    ),
    (
        "PATH:LINE:MESSAGE",
        r"(?P<path>[^:]+):(?P<line>\d+):\s*(?P<message>.*)",
    ),
];

/// Capture group names the extractor understands
const ALLOWED_GROUPS: &[&str] = &["path", "line", "col", "message"];

/// Error types for pattern resolution
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    Compile(#[from] regex::Error),

    #[error("invalid capture group `{0}` (expected path, line, col or message)")]
    UnknownGroup(String),
}

/// Resolve a symbolic or literal pattern reference into a compiled matcher.
///
/// Unnamed capture groups are permitted and ignored by the extractor;
/// named groups outside the path/line/col/message set are rejected.
pub fn resolve(pattern_ref: &str) -> Result<Regex, PatternError> {
    let literal = PREDEFINED
        .iter()
        .find(|(name, _)| *name == pattern_ref)
        .map(|(_, pattern)| *pattern)
        .unwrap_or(pattern_ref);

    let matcher = Regex::new(literal)?;

    for group in matcher.capture_names().flatten() {
        if !ALLOWED_GROUPS.contains(&group) {
            return Err(PatternError::UnknownGroup(group.to_string()));
        }
    }

    Ok(matcher)
}

/// Look up the literal expansion of a symbolic pattern name, if it is one.
pub fn predefined(name: &str) -> Option<&'static str> {
    PREDEFINED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, pattern)| *pattern)
}
