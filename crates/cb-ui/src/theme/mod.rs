//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for the focused area
    pub focus_border: Color,
    /// Border color for unfocused areas
    pub unfocus_border: Color,
    /// Active tab
    pub active_tab: Color,
    /// Inactive tab
    pub inactive_tab: Color,
    /// Author names
    pub author: Color,
    /// Timestamp and like count
    pub meta: Color,
    /// Delete marker
    pub delete: Color,
    /// Selected row background
    pub selection: Color,
    /// Unavailable list message
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            unfocus_border: Color::DarkGray,
            active_tab: Color::Cyan,
            inactive_tab: Color::Gray,
            author: Color::LightBlue,
            meta: Color::DarkGray,
            delete: Color::Red,
            selection: Color::Rgb(40, 40, 40),
            error: Color::Red,
        }
    }
}
