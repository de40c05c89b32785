//! Print the effective tool table

use anyhow::Result;
use colored::Colorize;
use metalint_core::tool::split_descriptor;
use metalint_core::Severity;

use crate::commands::run::load_config;
use crate::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(".", cli)?;
    let disabled = config.disabled();

    println!("Configured tools (severity defaults to error):");
    println!();

    for (name, descriptor) in &config.tools {
        let (command, pattern) =
            split_descriptor(descriptor).unwrap_or((descriptor.as_str(), "<invalid>"));

        let severity = config
            .severities
            .get(name)
            .copied()
            .unwrap_or(Severity::Error);
        let severity = match severity {
            Severity::Error => "error".red(),
            Severity::Warning => "warning".yellow(),
        };

        let status = if disabled.contains(name.as_str()) {
            " (disabled)".dimmed().to_string()
        } else {
            String::new()
        };

        println!(
            "    {} [{}] -> {} -> {}{}",
            name.bold(),
            severity,
            command,
            pattern,
            status
        );
        if let Some(template) = config.messages.get(name) {
            println!("        message: {}", template.dimmed());
        }
    }

    Ok(())
}
