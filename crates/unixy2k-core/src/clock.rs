//! Physical clock effect.
//!
//! The countdown never reads the system clock directly. Callers sample an
//! instant through [`PhysicalClock`] so loops can run against the real clock
//! while tests and one-shot queries substitute a [`FixedClock`].

use crate::errors::{TimeError, TimeResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime};

/// Wall-clock access for the countdown loops
#[async_trait]
pub trait PhysicalClock: Send + Sync {
    /// Current instant in UTC
    async fn now(&self) -> TimeResult<DateTime<Utc>>;

    /// Suspend the caller for `ms` milliseconds
    async fn sleep_ms(&self, ms: u64) -> TimeResult<()>;
}

/// Blanket implementation for Arc<T> where T: PhysicalClock
#[async_trait]
impl<T: PhysicalClock + ?Sized> PhysicalClock for std::sync::Arc<T> {
    async fn now(&self) -> TimeResult<DateTime<Utc>> {
        (**self).now().await
    }

    async fn sleep_ms(&self, ms: u64) -> TimeResult<()> {
        (**self).sleep_ms(ms).await
    }
}

/// Clock backed by `SystemTime::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock handler
    pub const fn new() -> Self {
        Self
    }

    /// Convert a raw `SystemTime` reading into a UTC instant.
    ///
    /// Readings before the Unix epoch or past chrono's range are reported as
    /// an unavailable clock rather than silently defaulted.
    pub fn instant_from(reading: SystemTime) -> TimeResult<DateTime<Utc>> {
        let since_epoch = reading
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|e| TimeError::clock_unavailable(format!("clock is before unix epoch: {e}")))?;

        let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| {
            TimeError::clock_unavailable(format!(
                "clock reading of {}s overflows i64",
                since_epoch.as_secs()
            ))
        })?;

        DateTime::from_timestamp(secs, since_epoch.subsec_nanos()).ok_or_else(|| {
            TimeError::clock_unavailable(format!("clock reading of {secs}s is out of range"))
        })
    }
}

#[async_trait]
impl PhysicalClock for SystemClock {
    async fn now(&self) -> TimeResult<DateTime<Utc>> {
        Self::instant_from(SystemTime::now())
    }

    async fn sleep_ms(&self, ms: u64) -> TimeResult<()> {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(())
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock that always reports `instant`
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Create a clock from whole seconds since the Unix epoch
    pub fn from_epoch(epoch: i64) -> TimeResult<Self> {
        DateTime::from_timestamp(epoch, 0)
            .map(Self::new)
            .ok_or(TimeError::OutOfRange { epoch })
    }

    /// The instant this clock reports
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[async_trait]
impl PhysicalClock for FixedClock {
    async fn now(&self) -> TimeResult<DateTime<Utc>> {
        Ok(self.instant)
    }

    async fn sleep_ms(&self, ms: u64) -> TimeResult<()> {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_system_clock_is_after_epoch() {
        let clock = SystemClock::new();
        let now = clock.now().await.unwrap();
        assert!(now.timestamp() > 0);
    }

    #[test]
    fn test_reading_before_epoch_is_unavailable() {
        let reading = SystemTime::UNIX_EPOCH - Duration::from_secs(10);
        let err = SystemClock::instant_from(reading).unwrap_err();
        assert!(matches!(err, TimeError::ClockUnavailable { .. }));
    }

    #[test]
    fn test_reading_keeps_subsecond_precision() {
        let reading = SystemTime::UNIX_EPOCH + Duration::from_millis(1_500);
        let instant = SystemClock::instant_from(reading).unwrap();
        assert_eq!(instant.timestamp(), 1);
        assert_eq!(instant.timestamp_subsec_millis(), 500);
    }

    #[tokio::test]
    async fn test_fixed_clock_repeats_instant() {
        let clock = FixedClock::from_epoch(1_700_000_000).unwrap();
        let first = clock.now().await.unwrap();
        let second = clock.now().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_fixed_clock_rejects_unrepresentable_epoch() {
        assert_eq!(
            FixedClock::from_epoch(i64::MAX),
            Err(TimeError::OutOfRange { epoch: i64::MAX })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_arc_forwards_sleep() {
        let clock: Arc<dyn PhysicalClock> = Arc::new(FixedClock::from_epoch(0).unwrap());
        let before = tokio::time::Instant::now();
        clock.sleep_ms(250).await.unwrap();
        assert!(before.elapsed() >= Duration::from_millis(250));
        assert_eq!(clock.now().await.unwrap().timestamp(), 0);
    }
}
