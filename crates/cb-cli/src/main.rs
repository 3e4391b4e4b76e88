//! comment-board - comment list in the terminal
//!
//! Shows a comment list with Hottest/Latest tabs, lets you publish comments
//! and delete your own.
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the built-in sample list
//! comment-board view --source static
//!
//! # Browse the list served by the mock server
//! comment-board view --url http://localhost:3004/list
//!
//! # Print the newest comments first
//! comment-board list --sort time
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
