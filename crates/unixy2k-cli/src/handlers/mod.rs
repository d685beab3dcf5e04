//! CLI Command Handlers
//!
//! One handler per subcommand. Each samples time through a `PhysicalClock`
//! handed in by the caller.

use crate::config::DisplayConfig;
use crate::tui::Styles;
use crate::Result;
use std::io::Write;
use unixy2k_core::{FixedClock, PhysicalClock, SystemClock};

pub mod once;
pub mod plain;
pub mod watch;

/// Main CLI handler that routes subcommands to their display loop
pub struct CliHandler {
    config: DisplayConfig,
}

impl CliHandler {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// Handle the full-screen view against the system clock
    pub async fn handle_watch(&self) -> Result<()> {
        let styles = Styles::for_theme(self.config.theme);
        watch::handle_watch(SystemClock::new(), styles, self.config.tick_ms).await
    }

    /// Handle the plain-text loop until Ctrl+C
    pub async fn handle_plain(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };
        plain::handle_plain(
            &SystemClock::new(),
            self.config.plain_interval_ms,
            &mut stdout,
            shutdown,
        )
        .await
    }

    /// Handle a single snapshot, optionally at a fixed epoch
    pub async fn handle_once(
        &self,
        at: Option<i64>,
        json: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        match at {
            Some(epoch) => {
                let clock = FixedClock::from_epoch(epoch)?;
                once::handle_once(&clock, json, out).await
            }
            None => once::handle_once(&SystemClock::new(), json, out).await,
        }
    }
}

/// Sample the clock once. Callers decide how failures are reported.
pub(crate) async fn sample<C>(clock: &C) -> unixy2k_core::TimeResult<unixy2k_core::TimeStatus>
where
    C: PhysicalClock + ?Sized,
{
    unixy2k_core::status_from_clock(clock).await
}
