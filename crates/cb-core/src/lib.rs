//! cb-core - Core library for comment-board
//!
//! This crate provides the comment list store: the comment model, the
//! hottest/latest sort modes, local add and delete, and the sources the
//! initial list is loaded from.

pub mod comment;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use error::{BoardError, Result};
pub use types::*;
