//! Main run command — merges configuration, orchestrates the tools and
//! prints the aggregated report

use anyhow::Result;
use log::debug;
use metalint_core::config::parse_severity;
use metalint_core::MetalintConfig;
use std::path::Path;
use std::time::Instant;

use crate::output;
use crate::Cli;

pub fn run(path: Option<&str>, cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let target = path.unwrap_or(".");

    let config = load_config(target, cli)?;

    // Compiles every pattern and the exclusion regex; a bad one aborts
    // here, before any tool task is launched.
    let plan = config.resolve(target)?;

    let issues = metalint_core::run(&plan)?;
    let report = metalint_core::render(issues, plan.run.exclude.as_ref());

    output::terminal::print_report(&report);

    debug!(
        "{} error(s), {} warning(s), total elapsed {:.2?}",
        report.summary.errors,
        report.summary.warnings,
        start.elapsed()
    );

    Ok(())
}

/// Build the effective configuration: defaults, then the config file,
/// then CLI flags, each layer overriding by tool name.
pub fn load_config(target: &str, cli: &Cli) -> Result<MetalintConfig> {
    let mut config = match &cli.config {
        Some(file) => MetalintConfig::from_file(file)?,
        None => MetalintConfig::find_and_load(Path::new(target))?,
    };

    if let Some(concurrency) = cli.concurrency {
        config.concurrency = concurrency;
    }
    if cli.fast {
        config.fast = true;
    }
    if let Some(exclude) = &cli.exclude {
        config.exclude = Some(exclude.clone());
    }
    config.disable.extend(cli.disable.iter().cloned());

    for (name, descriptor) in &cli.tools {
        config.tools.insert(name.clone(), descriptor.clone());
    }
    for (name, template) in &cli.message_overrides {
        config.messages.insert(name.clone(), template.clone());
    }
    for (name, value) in &cli.severities {
        let severity = parse_severity(name, value)?;
        config.severities.insert(name.clone(), severity);
    }

    Ok(config)
}
