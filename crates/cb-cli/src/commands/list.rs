//! List command
//!
//! Load the comment list and print it in the chosen order.

use super::{load_config, SourceArgs};
use anyhow::{bail, Context, Result};
use cb_core::comment::{Comment, CommentListStore, CurrentUser, LoadState};
use cb_core::config::SourceKind;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

/// List command arguments
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &args.source)?;
    let source = cb_source::from_config(&config.source).context("Failed to set up comment source")?;

    let spinner = (config.source.kind == SourceKind::Remote && !args.json).then(|| {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_message(format!("Fetching {}", config.source.url));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let mut store = CommentListStore::with_validator(config.validator());
    store.load_from(source.as_ref());

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if let LoadState::Unavailable(reason) = store.load_state() {
        bail!("Comment list unavailable: {}", reason);
    }

    store.sort(config.list.default_sort);

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.comments())?);
        return Ok(());
    }

    let user = config.current_user();
    println!(
        "{} {}",
        format!("Comments ({})", store.len()).bold().underline(),
        store.sort_mode().label().cyan()
    );
    println!();

    if store.is_empty() {
        println!("  No comments yet.");
        return Ok(());
    }

    for comment in store.comments() {
        print_comment(comment, &user);
    }

    Ok(())
}

fn print_comment(comment: &Comment, user: &CurrentUser) {
    let mut header = format!(
        "  {}  {}  Likes: {}",
        comment.author.display_name.bold(),
        comment.display_time().dimmed(),
        comment.like_count
    );
    if comment.is_authored_by(user) {
        header.push_str(&format!("  {}", "(yours)".green()));
    }
    println!("{}", header);
    println!("    {}", comment.text);
    println!();
}
