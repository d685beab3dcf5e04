//! Countdown calculator.
//!
//! Converts an instant into a [`TimeStatus`]: the formatted UTC time, the raw
//! epoch value, its low 32 bits as binary octets, and the time remaining until
//! [`TARGET_EPOCH`] broken down into years, months, days, hours, minutes and
//! seconds.
//!
//! The breakdown is deliberately approximate. Years are Julian years
//! (365.25 days) and months are twelfths of that year. Each unit is taken with
//! a truncating division followed by subtraction of the consumed amount, in
//! floating point, from the largest unit down.

use crate::clock::PhysicalClock;
use crate::errors::TimeResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Last second representable by a signed 32-bit `time_t`
pub const TARGET_EPOCH: i64 = 2_147_483_647;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;
const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: f64 = SECONDS_PER_YEAR / 12.0;

const UTC_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time left until the rollover, split into display units.
///
/// Fields are signed: once the target has passed the same arithmetic yields
/// zero or negative components (see [`RemainingTime::is_elapsed`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct RemainingTime {
    /// Julian years (365.25 days)
    pub years: i64,
    /// Twelfths of a Julian year
    pub months: i64,
    /// Whole days
    pub days: i64,
    /// Whole hours
    pub hours: i64,
    /// Whole minutes
    pub minutes: i64,
    /// Leftover seconds, truncated
    pub seconds: i64,
}

impl RemainingTime {
    /// Components as a tuple, most significant first
    pub const fn as_tuple(&self) -> (i64, i64, i64, i64, i64, i64) {
        (
            self.years,
            self.months,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        )
    }

    /// Whether the target second has passed.
    ///
    /// The target second itself is all zeros and not yet elapsed: the signed
    /// 32-bit counter still holds its maximum and wraps one second later.
    pub fn is_elapsed(&self) -> bool {
        *self < Self::default()
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {} days, {} hours, {} minutes, {} seconds",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Snapshot of the clock and the countdown at one instant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeStatus {
    /// `YYYY-MM-DD HH:MM:SS` in UTC
    pub utc_text: String,
    /// Whole seconds since 1970-01-01T00:00:00Z
    pub epoch_seconds: i64,
    /// Low 32 bits of `epoch_seconds`, four groups of eight binary digits
    pub binary_octets: [String; 4],
    /// Breakdown of the time left until [`TARGET_EPOCH`]
    pub remaining: RemainingTime,
}

impl TimeStatus {
    /// Binary octets joined by single spaces
    pub fn binary_text(&self) -> String {
        self.binary_octets.join(" ")
    }
}

/// Compute the status for `now`.
///
/// Pure: the same instant always yields an identical status.
pub fn compute_status(now: DateTime<Utc>) -> TimeStatus {
    let epoch_seconds = now.timestamp();

    TimeStatus {
        utc_text: now.format(UTC_FORMAT).to_string(),
        epoch_seconds,
        binary_octets: binary_octets(epoch_seconds),
        remaining: decompose_remaining((TARGET_EPOCH - epoch_seconds) as f64),
    }
}

/// Sample `clock` once and compute the status for that instant
pub async fn status_from_clock<C>(clock: &C) -> TimeResult<TimeStatus>
where
    C: PhysicalClock + ?Sized,
{
    let now = clock.now().await?;
    let status = compute_status(now);
    tracing::trace!(epoch = status.epoch_seconds, "computed countdown status");
    Ok(status)
}

/// Render the low 32 bits of `epoch_seconds` as four 8-digit binary groups.
///
/// Values wider than 32 bits wrap: only the low word is shown.
pub fn binary_octets(epoch_seconds: i64) -> [String; 4] {
    let bits = format!("{:032b}", epoch_seconds as u32);
    std::array::from_fn(|i| bits[i * 8..(i + 1) * 8].to_string())
}

/// Split `remaining` seconds into years, months, days, hours, minutes and
/// seconds.
///
/// Each step truncates toward zero, so a negative input produces non-positive
/// components instead of being clamped.
pub fn decompose_remaining(remaining: f64) -> RemainingTime {
    let mut remaining = remaining;

    let years = (remaining / SECONDS_PER_YEAR) as i64;
    remaining -= years as f64 * SECONDS_PER_YEAR;

    let months = (remaining / SECONDS_PER_MONTH) as i64;
    remaining -= months as f64 * SECONDS_PER_MONTH;

    let days = (remaining / SECONDS_PER_DAY) as i64;
    remaining -= days as f64 * SECONDS_PER_DAY;

    let hours = (remaining / SECONDS_PER_HOUR) as i64;
    remaining -= hours as f64 * SECONDS_PER_HOUR;

    let minutes = (remaining / SECONDS_PER_MINUTE) as i64;
    let seconds = (remaining - minutes as f64 * SECONDS_PER_MINUTE) as i64;

    RemainingTime {
        years,
        months,
        days,
        hours,
        minutes,
        seconds,
    }
}

/// The rollover instant, 2038-01-19 03:14:07 UTC
pub fn target_instant() -> DateTime<Utc> {
    DateTime::from_timestamp(TARGET_EPOCH, 0).unwrap_or_default()
}
