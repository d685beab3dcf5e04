//! Text shared by the plain and full-screen renderers.

use unixy2k_core::{target_instant, TimeStatus};

/// Width of the label column, including trailing padding
pub const LABEL_WIDTH: usize = 15;

/// Screen title, shown only in the full-screen view
pub const TITLE: &str = "🕰️  Unixy2K CLI Countdown 🕰️";
/// Prefix for the countdown heading in the full-screen view
pub const HEADING_MARKER: &str = "⏳ ";
pub const UTC_LABEL: &str = "UTC Date:";
pub const EPOCH_LABEL: &str = "Epoch Time:";
pub const BINARY_LABEL: &str = "Epoch Binary:";
pub const HELP_TEXT: &str = "Press 'q', 'esc', or 'ctrl+c' to quit.";
pub const PLACEHOLDER_TEXT: &str = "Initializing display...";

/// Heading above the remaining-time sentence
pub fn countdown_label(elapsed: bool) -> String {
    if elapsed {
        "The 32-bit epoch has rolled over:".to_string()
    } else {
        format!(
            "Remaining Time until {} UTC:",
            target_instant().format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Label padded to the label column
pub fn label(text: &str) -> String {
    format!("{text:<LABEL_WIDTH$}")
}

/// Plain-text block for one status
pub fn render_plain(status: &TimeStatus) -> String {
    format!(
        "{}{}\n{}{}\n{}{}\n{}\n{}\n",
        label(UTC_LABEL),
        status.utc_text,
        label(EPOCH_LABEL),
        status.epoch_seconds,
        label(BINARY_LABEL),
        status.binary_text(),
        countdown_label(status.remaining.is_elapsed()),
        status.remaining,
    )
}
