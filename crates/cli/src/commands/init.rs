//! Initialize .metalint.toml configuration

use anyhow::Result;
use colored::Colorize;
use metalint_core::config::CONFIG_FILE;
use metalint_core::MetalintConfig;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let target = path.unwrap_or_else(|| Path::new("."));
    let config_path = target.join(CONFIG_FILE);

    if config_path.exists() {
        println!(
            "{} {} already exists at {:?}",
            "warn:".yellow(),
            CONFIG_FILE,
            config_path
        );
        return Ok(());
    }

    let config = MetalintConfig::default();
    config.save(&config_path)?;

    println!("Created {} at {:?}", CONFIG_FILE, config_path);
    println!();
    println!("Customise the tool table, then run:");
    println!("  metalint");

    Ok(())
}
