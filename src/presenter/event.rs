//! Input event handling for the TUI

use super::app::AppAction;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// UI loop tick, bounding how late timers and poll results are shown
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Events that can occur in the TUI
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for refreshing UI
    Tick,
}

/// Handles input events from the terminal
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event, waiting at most one tick
    pub fn next_event(&self) -> anyhow::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports releases too
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(Event::Resize(w, h)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }

    /// Convert a key event to an app action
    pub fn key_to_action(key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc | KeyCode::F(11) => AppAction::ToggleFullscreen,
            KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppAction::Quit,
            KeyCode::Char('?') => AppAction::ToggleHelp,
            _ => AppAction::None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}
