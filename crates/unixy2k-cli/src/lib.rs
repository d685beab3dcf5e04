//! unixy2k CLI Library
//!
//! Display surfaces for the 2038 countdown:
//! - `watch`: full-screen terminal UI refreshed on a sub-second tick
//! - `plain`: plain-text block printed once per interval
//! - `once`: a single snapshot, as text or JSON
//!
//! All surfaces sample time through `unixy2k_core::PhysicalClock` and render
//! the `TimeStatus` produced by the core calculator.

#![allow(missing_docs)]

pub mod config;
pub mod format;
pub mod handlers;
pub mod logging;
pub mod tui;

pub use config::{load_config, DisplayConfig, ThemeName};
pub use handlers::CliHandler;

use unixy2k_core::TimeError;

/// CLI error types
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error(transparent)]
    Time(#[from] TimeError),
}

pub type Result<T> = std::result::Result<T, CliError>;
