//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod list;
pub mod view;

use anyhow::{Context, Result};
use cb_core::comment::SortMode;
use cb_core::config::{Config, SourceKind};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// comment-board - browse, publish and delete comments in the terminal
#[derive(Debug, Parser)]
#[command(name = "comment-board")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the comment list in the terminal UI
    View(view::ViewArgs),

    /// Print the comment list
    List(list::ListArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Flags selecting where the list is loaded from
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Comment source (static, remote or file)
    #[arg(long, value_name = "KIND")]
    pub source: Option<SourceKind>,

    /// List endpoint for the remote source
    #[arg(long, env = "COMMENT_BOARD_URL")]
    pub url: Option<String>,

    /// JSON data file for the file source
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Tab to start on (hot or time)
    #[arg(long, value_name = "ORDER")]
    pub sort: Option<SortMode>,
}

impl SourceArgs {
    /// Apply the flags on top of the loaded configuration
    ///
    /// `--url` and `--file` imply their source kind unless `--source` is given.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
            config.source.kind = SourceKind::Remote;
        }
        if let Some(file) = &self.file {
            config.source.path = file.clone();
            config.source.kind = SourceKind::File;
        }
        if let Some(kind) = self.source {
            config.source.kind = kind;
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_secs = timeout;
        }
        if let Some(sort) = self.sort {
            config.list.default_sort = sort;
        }
    }
}

/// Load the configuration and apply command-line overrides
pub fn load_config(explicit: Option<&Path>, args: &SourceArgs) -> Result<Config> {
    let (mut config, path) = Config::discover(explicit).context("Failed to load configuration")?;
    if let Some(path) = path {
        tracing::info!("Loaded configuration from {}", path.display());
    }

    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The terminal UI owns the screen, so it only logs when asked to
    let tui = matches!(cli.command, Commands::View(_));
    setup_logging(cli.verbose, tui);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::View(args) => view::execute(args, config_path),
        Commands::List(args) => list::execute(args, config_path),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8, tui: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 if tui => EnvFilter::new("off"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
