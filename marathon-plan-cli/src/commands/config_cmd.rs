use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

pub fn show_config(path: Option<&Path>) -> Result<()> {
    let config_file = Config::config_file(path)?;
    let config = Config::load(path)?;
    let config_str = toml::to_string_pretty(&config)?;

    println!("{}", "Current Configuration".bold());
    println!("────────────────────────────────");
    println!("File: {}", config_file.display());
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let config_file = Config::config_file(path)?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let written = Config::default().save(path)?;

    println!(
        "{} Configuration initialized at: {}",
        "✓".green(),
        written.display()
    );

    Ok(())
}
