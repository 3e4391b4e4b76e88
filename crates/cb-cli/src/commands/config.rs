//! Config command
//!
//! Manage comment-board configuration.

use anyhow::{Context, Result};
use cb_core::config::{Config, LOCAL_CONFIG_PATH};
use clap::Subcommand;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration for this project
    Init {
        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,

    /// List the files searched for configuration
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
        ConfigCommand::Path => list_paths(config_path),
    }
}

fn show_config(config_path: Option<&Path>, as_json: bool) -> Result<()> {
    let (config, path) = Config::discover(config_path).context("Failed to load configuration")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    match path {
        Some(path) => println!("{}", path.display().to_string().dimmed()),
        None => println!("{}", "(built-in defaults)".dimmed()),
    }
    println!();
    println!("{}", config.to_toml()?);

    Ok(())
}

fn init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_PATH));

    if path.exists() {
        if !force {
            use dialoguer::Confirm;

            let confirmed = Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", path.display()))
                .default(false)
                .interact()?;

            if !confirmed {
                println!("Init cancelled.");
                return Ok(());
            }
        }

        let backup_path = format!(
            "{}.backup-{}",
            path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(&path, &backup_path).context("Failed to back up configuration")?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = format!(
        "# comment-board configuration\n\n{}",
        Config::default().to_toml()?
    );
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Created {}", "✓".green(), path.display());
    Ok(())
}

fn validate_config(config_path: Option<&Path>) -> Result<()> {
    let (config, path) = Config::discover(config_path).context("Failed to load configuration")?;
    config.validate()?;

    let origin = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    println!("{} Configuration is valid ({})", "✓".green(), origin);
    Ok(())
}

fn list_paths(config_path: Option<&Path>) -> Result<()> {
    let candidates = match config_path {
        Some(path) => vec![path.to_path_buf()],
        None => Config::search_paths(),
    };

    for candidate in candidates {
        let marker = if candidate.exists() {
            "✓".green()
        } else {
            "·".dimmed()
        };
        println!("{} {}", marker, candidate.display());
    }
    Ok(())
}
