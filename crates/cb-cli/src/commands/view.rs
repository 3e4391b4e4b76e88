//! View command
//!
//! Open the comment list in the terminal UI.

use super::{load_config, SourceArgs};
use anyhow::{Context, Result};
use cb_core::comment::CommentListStore;
use cb_ui::{App, Board, ViewOptions};
use clap::Args;
use std::path::Path;

/// View command arguments
#[derive(Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Hide avatar badges
    #[arg(long)]
    pub no_avatars: bool,
}

/// Execute the view command
pub fn execute(args: ViewArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &args.source)?;
    let source = cb_source::from_config(&config.source).context("Failed to set up comment source")?;

    let options = ViewOptions {
        initial_sort: config.list.default_sort,
        show_avatars: config.ui.show_avatars && !args.no_avatars,
    };

    // Fetch before the terminal switches screens
    let board = Board::new(
        CommentListStore::with_validator(config.validator()),
        config.current_user(),
        source,
        options,
    );

    let mut app = App::new(board).context("Failed to start terminal UI")?;
    app.run()?;

    Ok(())
}
