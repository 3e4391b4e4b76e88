//! View state: mode, selection and the comment composer

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Browsing the list
    #[default]
    Normal,
    /// Writing a comment
    Insert,
    /// Help popup
    Help,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
    /// Index of the selected comment
    pub selected: usize,
    /// Composer content
    pub editor_content: String,
    /// Composer cursor position (in characters)
    pub editor_cursor: usize,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Keep the selection inside a list of `len` comments
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Empty the composer
    pub fn clear_editor(&mut self) {
        self.editor_content.clear();
        self.editor_cursor = 0;
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.char_to_byte_pos(self.editor_cursor);
        self.editor_content.insert(byte_pos, c);
        self.editor_cursor += 1;
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.editor_cursor > 0 {
            self.editor_cursor -= 1;
            let byte_pos = self.char_to_byte_pos(self.editor_cursor);
            if let Some(c) = self.editor_content[byte_pos..].chars().next() {
                self.editor_content.drain(byte_pos..byte_pos + c.len_utf8());
            }
        }
    }

    pub fn cursor_left(&mut self) {
        self.editor_cursor = self.editor_cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.editor_cursor < self.editor_content.chars().count() {
            self.editor_cursor += 1;
        }
    }

    /// Convert character position to byte position
    fn char_to_byte_pos(&self, char_pos: usize) -> usize {
        self.editor_content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.editor_content.len())
    }
}
