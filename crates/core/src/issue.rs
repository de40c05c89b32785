//! Issue types that bridge extraction results to the report formatter

use serde::{Deserialize, Serialize};

/// Severity level of an issue.
///
/// The set is closed: every issue carries exactly one of these. Tools with
/// no configured severity produce [`Severity::Error`] — unclassified
/// checkers are treated as blocking until someone decides otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single normalised finding from one matched line of checker output.
///
/// Immutable after creation: the extractor builds it, the runner moves it
/// through the aggregation channel, the formatter renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity level
    pub severity: Severity,

    /// File the finding refers to
    pub path: String,

    /// 1-based line number
    pub line: u32,

    /// 1-based column; 0 means unknown and renders as an empty field
    pub col: u32,

    /// Human-readable message (may be empty)
    pub message: String,
}

impl std::fmt::Display for Issue {
    /// The authoritative line format: `path:line:col:severity: message`.
    /// An unset column renders as two consecutive colons.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:", self.path, self.line)?;
        if self.col != 0 {
            write!(f, "{}", self.col)?;
        }
        write!(f, ":{}: {}", self.severity, self.message)
    }
}

/// Summary of an entire run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub errors: usize,
    pub warnings: usize,
}
