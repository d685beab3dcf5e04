//! One-shot snapshot
//!
//! Prints a single status as the plain-text block or as pretty JSON.

use crate::format::render_plain;
use crate::{CliError, Result};
use std::io::Write;
use unixy2k_core::PhysicalClock;

/// Print one status sampled from `clock`
pub async fn handle_once<C>(clock: &C, json: bool, out: &mut impl Write) -> Result<()>
where
    C: PhysicalClock + ?Sized,
{
    let status = super::sample(clock).await?;

    let rendered = if json {
        let mut text = serde_json::to_string_pretty(&status)
            .map_err(|e| CliError::Serialization(format!("Failed to format JSON: {e}")))?;
        text.push('\n');
        text
    } else {
        render_plain(&status)
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unixy2k_core::{FixedClock, TARGET_EPOCH};

    #[tokio::test]
    async fn test_once_plain_at_target() {
        let clock = FixedClock::from_epoch(TARGET_EPOCH).unwrap();
        let mut out = Vec::new();
        handle_once(&clock, false, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("2038-01-19 03:14:07"));
        assert!(text.contains("01111111 11111111 11111111 11111111"));
        assert!(text.contains("0 years, 0 months, 0 days, 0 hours, 0 minutes, 0 seconds"));
    }

    #[tokio::test]
    async fn test_once_json() {
        let clock = FixedClock::from_epoch(0).unwrap();
        let mut out = Vec::new();
        handle_once(&clock, true, &mut out).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["utc_text"], "1970-01-01 00:00:00");
        assert_eq!(value["epoch_seconds"], 0);
        assert_eq!(value["remaining"]["years"], 68);
        assert_eq!(value["remaining"]["days"], 18);
    }
}
