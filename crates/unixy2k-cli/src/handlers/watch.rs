//! Full-screen countdown command

use crate::tui::{Styles, TuiApp};
use crate::Result;
use unixy2k_core::PhysicalClock;

/// Run the full-screen view until a quit key is pressed
pub async fn handle_watch<C: PhysicalClock>(clock: C, styles: Styles, tick_ms: u64) -> Result<()> {
    tracing::info!(tick_ms, "starting countdown screen");
    let mut app = TuiApp::new(clock, styles, tick_ms);
    app.run().await
}
