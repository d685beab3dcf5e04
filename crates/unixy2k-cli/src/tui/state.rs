//! # TUI State Machine
//!
//! Pure model of the countdown screen. Every event is a [`TuiMessage`]; the
//! [`transition`] function returns the next state and the commands the
//! runtime must carry out. No terminal I/O happens here.

use crate::tui::input::{action_for, InputAction};
use crossterm::event::KeyEvent;
use unixy2k_core::{TimeError, TimeStatus};

/// Events delivered to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// A tick fired and the clock was sampled
    Tick(Result<TimeStatus, TimeError>),
    /// The terminal reported its size
    Resize { width: u16, height: u16 },
    /// A key was pressed
    Key(KeyEvent),
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiCommand {
    /// Sample the clock again after one tick interval
    ScheduleTick,
    /// Leave the application
    Quit,
}

/// Countdown screen state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TuiState {
    status: Option<TimeStatus>,
    error: Option<TimeError>,
    width: u16,
    height: u16,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state plus the command that starts ticking
    pub fn init() -> (Self, Vec<TuiCommand>) {
        (Self::new(), vec![TuiCommand::ScheduleTick])
    }

    /// Last successfully computed status
    pub fn status(&self) -> Option<&TimeStatus> {
        self.status.as_ref()
    }

    /// Error from the most recent tick, cleared by the next good one
    pub fn error(&self) -> Option<&TimeError> {
        self.error.as_ref()
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// The error this state shows that `previous` did not, if any
    pub fn entered_error(&self, previous: &TuiState) -> Option<&TimeError> {
        match (&previous.error, &self.error) {
            (None, Some(error)) => Some(error),
            _ => None,
        }
    }

    /// Whether the terminal size is still unknown
    pub fn is_initializing(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Apply `message` to `state`
pub fn transition(state: &TuiState, message: TuiMessage) -> (TuiState, Vec<TuiCommand>) {
    let mut next = state.clone();

    let commands = match message {
        TuiMessage::Resize { width, height } => {
            next.width = width;
            next.height = height;
            Vec::new()
        }
        TuiMessage::Tick(Ok(status)) => {
            next.status = Some(status);
            next.error = None;
            vec![TuiCommand::ScheduleTick]
        }
        TuiMessage::Tick(Err(error)) => {
            next.error = Some(error);
            vec![TuiCommand::ScheduleTick]
        }
        TuiMessage::Key(key) => match action_for(key) {
            InputAction::Quit => vec![TuiCommand::Quit],
            InputAction::None => Vec::new(),
        },
    };

    (next, commands)
}
