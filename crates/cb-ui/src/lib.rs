//! cb-ui - TUI library for comment-board
//!
//! This crate provides the terminal view of the comment list.
//!
//! # Overview
//!
//! The TUI provides:
//! - Hottest / Latest tabs that reorder the list
//! - The comment list with author, time and like count
//! - A composer for publishing comments
//! - Deletion of the user's own comments
//!
//! # Example
//!
//! ```ignore
//! use cb_ui::{App, Board, ViewOptions};
//!
//! let board = Board::new(store, user, source, ViewOptions::default());
//! App::new(board)?.run()?;
//! ```

pub mod app;
pub mod events;
pub mod render;
pub mod theme;

#[cfg(test)]
mod testing;

pub use app::{App, AppMode, AppState, Board, ViewOptions};
pub use theme::Theme;
