//! # Countdown Screen Rendering
//!
//! Draws a [`TuiState`] centered in the frame. Three layouts: a placeholder
//! while the terminal size is unknown, an error banner, and the countdown.

use crate::format::{
    countdown_label, label, BINARY_LABEL, EPOCH_LABEL, HEADING_MARKER, HELP_TEXT,
    PLACEHOLDER_TEXT, TITLE, UTC_LABEL,
};
use crate::tui::state::TuiState;
use crate::tui::styles::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unixy2k_core::TimeStatus;

/// Render the countdown screen
pub fn render(f: &mut Frame<'_>, state: &TuiState, styles: &Styles) {
    let lines = screen_lines(state, styles);
    let area = centered_rect(lines.len(), f.size());
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Lines for the current state, top to bottom
pub fn screen_lines(state: &TuiState, styles: &Styles) -> Vec<Line<'static>> {
    if state.is_initializing() {
        return vec![Line::styled(PLACEHOLDER_TEXT, styles.muted())];
    }

    if let Some(error) = state.error() {
        return vec![
            Line::styled(format!("Error: {error}"), styles.error()),
            Line::from(""),
            Line::styled(HELP_TEXT, styles.muted()),
        ];
    }

    let mut lines = match state.status() {
        Some(status) => status_lines(status, styles),
        None => vec![Line::styled(PLACEHOLDER_TEXT, styles.muted())],
    };
    lines.push(Line::from(""));
    lines.push(Line::styled(HELP_TEXT, styles.muted()));
    lines
}

fn status_lines(status: &TimeStatus, styles: &Styles) -> Vec<Line<'static>> {
    let elapsed = status.remaining.is_elapsed();

    vec![
        Line::styled(TITLE, styles.title()),
        Line::from(""),
        row(UTC_LABEL, status.utc_text.clone(), styles, styles.value()),
        row(
            EPOCH_LABEL,
            status.epoch_seconds.to_string(),
            styles,
            styles.value(),
        ),
        row(BINARY_LABEL, status.binary_text(), styles, styles.binary()),
        Line::from(""),
        Line::styled(
            format!("{HEADING_MARKER}{}", countdown_label(elapsed)),
            styles.countdown_label(),
        ),
        Line::from(""),
        Line::styled(
            status.remaining.to_string(),
            styles.countdown_value(elapsed),
        ),
    ]
}

fn row(name: &str, value: String, styles: &Styles, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(label(name), styles.label()),
        Span::styled(value, value_style),
    ])
}

/// Full-width strip of `height` rows, vertically centered in `r`
fn centered_rect(height: usize, r: Rect) -> Rect {
    let height = u16::try_from(height).unwrap_or(u16::MAX).min(r.height);
    let top = (r.height - height) / 2;
    Rect::new(r.x, r.y + top, r.width, height)
}
