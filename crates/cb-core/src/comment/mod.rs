//! Comment list module
//!
//! Holds the comment model, sort modes, validation and the list store.

pub mod builder;
pub mod model;
pub mod sort;
pub mod store;
pub mod validator;

pub use builder::CommentBuilder;
pub use model::*;
pub use sort::SortMode;
pub use store::{CommentListStore, LoadState};
pub use validator::CommentValidator;
