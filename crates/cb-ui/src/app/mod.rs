//! Main application: terminal setup and the event loop

mod board;
mod state;

pub use board::{Board, ViewOptions};
pub use state::{AppMode, AppState};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

use crate::events::{self, Event};
use crate::render;
use crate::theme::Theme;

/// Main application
pub struct App {
    /// The view session
    pub board: Board,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Colors
    theme: Theme,
}

impl App {
    /// Take over the terminal for `board`
    pub fn new(board: Board) -> Result<Self> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            board,
            terminal,
            theme: Theme::default(),
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            match events::poll(Duration::from_millis(100))? {
                Event::Input(key) => self.board.handle_key(key),
                // draw() picks up the new size
                Event::Resize(_, _) | Event::Tick => {}
            }

            if self.board.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let board = &self.board;
        let theme = &self.theme;
        self.terminal
            .draw(|frame| render::draw(frame, board, theme))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = self.terminal.show_cursor();
    }
}
