//! Plain-text countdown loop
//!
//! Prints one block per interval until the shutdown future resolves. Clock
//! failures are reported inline and the loop keeps going.

use crate::format::render_plain;
use crate::Result;
use std::future::Future;
use std::io::Write;
use unixy2k_core::PhysicalClock;

/// Run the plain-text loop, writing to `out`
pub async fn handle_plain<C, W, S>(
    clock: &C,
    interval_ms: u64,
    out: &mut W,
    shutdown: S,
) -> Result<()>
where
    C: PhysicalClock + ?Sized,
    W: Write,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    tracing::info!(interval_ms, "starting plain countdown");

    let mut first = true;
    loop {
        if !first {
            writeln!(out)?;
        }
        first = false;

        match super::sample(clock).await {
            Ok(status) => out.write_all(render_plain(&status).as_bytes())?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read clock");
                writeln!(out, "Error: {e}")?;
            }
        }
        out.flush()?;

        tokio::select! {
            () = &mut shutdown => break,
            slept = clock.sleep_ms(interval_ms) => slept?,
        }
    }

    tracing::info!("plain countdown stopped");
    Ok(())
}
