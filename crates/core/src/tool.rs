//! Tool specification and shell invocation
//!
//! A [`ToolSpec`] is the merged, immutable configuration for one external
//! checker. Invocation goes through the platform shell so command templates
//! can use pipes, quoting and redirection like any shell one-liner.

use crate::issue::Severity;
use log::debug;
use regex::Regex;
use std::io;
use std::process::Command;

/// Placeholder expanded to the target path in command templates
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Configuration for one external checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Unique identifier, the key for all override maps
    pub name: String,

    /// Command template containing `{path}`
    pub command: String,

    /// Symbolic pattern name or literal regex with named capture groups
    pub pattern: String,

    /// Template with a `{message}` placeholder replacing the extracted message
    pub message_override: Option<String>,

    /// Configured severity; issues default to `error` when absent
    pub severity_override: Option<Severity>,
}

impl ToolSpec {
    /// Run this tool's command against `target` and capture its combined
    /// output. See [`invoke`].
    pub fn invoke(&self, target: &str) -> io::Result<Vec<u8>> {
        invoke(&self.command, target)
    }
}

/// A [`ToolSpec`] paired with its compiled extraction matcher.
///
/// Produced by [`crate::config::MetalintConfig::resolve`]; compilation
/// happens once at startup so a bad pattern fails the run before any
/// subprocess is spawned.
#[derive(Debug)]
pub struct ResolvedTool {
    pub spec: ToolSpec,
    pub matcher: Regex,
}

/// Split a `command:pattern` descriptor at the first colon.
pub fn split_descriptor(descriptor: &str) -> Option<(&str, &str)> {
    let mut parts = descriptor.splitn(2, ':');
    match (parts.next(), parts.next()) {
        (Some(command), Some(pattern)) if !command.is_empty() && !pattern.is_empty() => {
            Some((command, pattern))
        }
        _ => None,
    }
}

/// The platform shell used to run tool commands. The only
/// platform-conditional behaviour in the engine lives here.
fn shell() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}

/// Expand `{path}` in `command` and run it through the platform shell,
/// returning stdout and stderr as one stream in temporal order.
///
/// The merge is done by the shell itself, since checkers write
/// diagnostics to either stream interchangeably. The command is wrapped
/// in a subshell so the merge also covers redirections inside the
/// template. A non-zero exit status is not an error here — checkers
/// conventionally exit non-zero when they find something — so the only
/// `Err` is a failure to launch the shell.
pub fn invoke(command: &str, target: &str) -> io::Result<Vec<u8>> {
    let expanded = command.replace(PATH_PLACEHOLDER, target);
    let (shell, flag) = shell();

    debug!("executing {}", expanded);
    let output = Command::new(shell)
        .arg(flag)
        .arg(format!("({}) 2>&1", expanded))
        .output()?;

    if !output.status.success() {
        debug!("{} returned {}", expanded, output.status);
    }

    Ok(output.stdout)
}
