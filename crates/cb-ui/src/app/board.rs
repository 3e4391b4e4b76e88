//! Key handling on top of the comment list store

use cb_core::comment::{Comment, CommentListStore, CurrentUser, SortMode};
use cb_core::source::CommentSource;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::state::{AppMode, AppState};

/// Display options
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Tab selected at startup
    pub initial_sort: SortMode,
    /// Show avatar badges
    pub show_avatars: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            initial_sort: SortMode::ByLikesDescending,
            show_avatars: true,
        }
    }
}

/// One view session: the store, who is looking at it and the UI state
pub struct Board {
    /// Application state
    pub state: AppState,
    store: CommentListStore,
    user: CurrentUser,
    source: Box<dyn CommentSource>,
    options: ViewOptions,
}

impl Board {
    /// Create a board and load the list from `source`
    pub fn new(
        store: CommentListStore,
        user: CurrentUser,
        source: Box<dyn CommentSource>,
        options: ViewOptions,
    ) -> Self {
        let mut board = Self {
            state: AppState::new(),
            store,
            user,
            source,
            options,
        };
        board.reload();
        board
    }

    /// Fetch the list again and apply the active tab
    pub fn reload(&mut self) {
        let mode = if self.store.load_state().is_ready() {
            self.store.sort_mode()
        } else {
            self.options.initial_sort
        };

        if self.store.load_from(self.source.as_ref()).is_ready() {
            self.store.sort(mode);
            self.state.clamp_selection(self.store.len());
            self.state.clear_message();
        } else {
            self.state.set_message("Comment list unavailable (press r to retry)");
        }
    }

    pub fn store(&self) -> &CommentListStore {
        &self.store
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// The selected comment, if any
    pub fn selected(&self) -> Option<&Comment> {
        self.store.comments().get(self.state.selected)
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.mode {
            AppMode::Normal => self.handle_normal_input(key),
            AppMode::Insert => self.handle_insert_input(key),
            AppMode::Help => self.state.mode = AppMode::Normal,
        }
    }

    fn handle_normal_input(&mut self, key: KeyEvent) {
        self.state.clear_message();
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.should_quit = true
            }
            KeyCode::Char('?') => self.state.mode = AppMode::Help,

            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('g') | KeyCode::Home => self.state.selected = 0,
            KeyCode::Char('G') | KeyCode::End => {
                self.state.selected = self.store.len().saturating_sub(1)
            }

            // Tabs
            KeyCode::Char('h') => self.select_tab(SortMode::ByLikesDescending),
            KeyCode::Char('t') => self.select_tab(SortMode::ByCreatedAtDescending),
            KeyCode::Tab | KeyCode::BackTab => self.select_tab(self.store.sort_mode().toggle()),

            KeyCode::Char('x') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('c') | KeyCode::Char('i') => {
                if self.store.load_state().is_ready() {
                    self.state.mode = AppMode::Insert;
                    self.state.clear_editor();
                } else {
                    self.state.set_message("Cannot comment before the list is loaded");
                }
            }
            KeyCode::Char('r') => {
                if self.store.load_state().is_ready() {
                    self.state.set_message("List already loaded");
                } else {
                    self.reload();
                }
            }
            _ => {}
        }
    }

    fn handle_insert_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.mode = AppMode::Normal;
                self.state.clear_editor();
            }
            KeyCode::Enter => self.publish(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.should_quit = true
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => self.state.insert_char(c),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Left => self.state.cursor_left(),
            KeyCode::Right => self.state.cursor_right(),
            _ => {}
        }
    }

    fn move_down(&mut self) {
        if self.state.selected + 1 < self.store.len() {
            self.state.selected += 1;
        }
    }

    fn move_up(&mut self) {
        self.state.selected = self.state.selected.saturating_sub(1);
    }

    /// Switch tab and reorder the list
    pub fn select_tab(&mut self, mode: SortMode) {
        debug!("Switching to {} tab", mode.label());
        self.store.sort(mode);
        self.state.selected = 0;
    }

    /// Delete the selected comment if the user wrote it
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected().map(|c| c.id.clone()) else {
            self.state.set_message("No comment selected");
            return;
        };

        if !self.store.can_delete(&id, &self.user) {
            self.state.set_message("You can only delete your own comments");
            return;
        }

        self.store.delete(&id);
        self.state.clamp_selection(self.store.len());
        self.state.set_message("Comment deleted");
    }

    /// Publish the composer content; the composer stays open
    pub fn publish(&mut self) {
        if self.state.editor_content.trim().is_empty() {
            self.state.set_message("Nothing to publish");
            return;
        }

        match self.store.add(&self.state.editor_content, self.user.as_author()) {
            Ok(_) => {
                self.state.selected = self.store.len().saturating_sub(1);
                self.state.clear_editor();
                self.state.set_message("Comment published");
            }
            Err(e) => self.state.set_message(e.to_string()),
        }
    }
}
