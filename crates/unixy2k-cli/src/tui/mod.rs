//! # unixy2k TUI - Full-Screen Countdown
//!
//! Ratatui screen that refreshes the countdown on every tick. The state
//! machine in [`state`] is pure; [`app`] owns the terminal and the clock.

pub mod app;
pub mod input;
pub mod state;
pub mod styles;
pub mod view;

pub use app::TuiApp;
pub use state::{transition, TuiCommand, TuiMessage, TuiState};
pub use styles::{ColorPalette, Styles};
