//! # TUI Input Handling
//!
//! Maps key events to actions. The countdown only reacts to quit keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No action taken
    None,
    /// Quit the application
    Quit,
}

/// Map a key event to its action: `q`, `Esc` and `Ctrl+C` quit
pub fn action_for(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        _ => InputAction::None,
    }
}
