//! Event handling

use anyhow::Result;
use crossterm::event::{self, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Input(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Nothing happened within the poll interval
    Tick,
}

/// Wait up to `timeout` for the next terminal event
pub fn poll(timeout: Duration) -> Result<Event> {
    if !event::poll(timeout)? {
        return Ok(Event::Tick);
    }

    Ok(match event::read()? {
        // Windows reports key releases as well
        event::Event::Key(key) if key.kind == KeyEventKind::Press => Event::Input(key),
        event::Event::Resize(w, h) => Event::Resize(w, h),
        _ => Event::Tick,
    })
}
