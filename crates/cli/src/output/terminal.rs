//! Terminal output formatting

use metalint_core::Report;

/// Write the final report to stdout, one issue per line.
///
/// The `path:line:col:severity: message` line is the contract consumers
/// parse; nothing else is ever written to stdout.
pub fn print_report(report: &Report) {
    for line in &report.lines {
        println!("{}", line);
    }
}
