//! Report rendering: exclusion filtering, the three-key sort, and the
//! final line formatting.

use crate::issue::{Issue, RunSummary, Severity};
use regex::Regex;

/// A finished report: rendered lines in final order plus severity counts
/// for whatever survived the exclusion filter.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub lines: Vec<String>,
    pub summary: RunSummary,
}

/// Sort, filter and render the aggregated issues.
///
/// The sort is genuinely lexicographic — path, then line, then column —
/// and stable, so ties beyond those three keys keep arrival order. The
/// exclusion matcher runs against the fully rendered line, letting users
/// exclude by severity or message substring as well as by path.
pub fn render(mut issues: Vec<Issue>, exclude: Option<&Regex>) -> Report {
    issues.sort_by(|a, b| {
        a.path
            .cmp(&b.path)
            .then(a.line.cmp(&b.line))
            .then(a.col.cmp(&b.col))
    });

    let mut report = Report::default();
    for issue in &issues {
        let line = issue.to_string();
        if exclude.is_some_and(|re| re.is_match(&line)) {
            continue;
        }
        match issue.severity {
            Severity::Error => report.summary.errors += 1,
            Severity::Warning => report.summary.warnings += 1,
        }
        report.lines.push(line);
    }
    report
}
