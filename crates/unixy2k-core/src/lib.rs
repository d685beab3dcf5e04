//! unixy2k Core - Countdown to the 32-bit Unix Time Rollover
//!
//! This crate computes how much time is left until a signed 32-bit epoch
//! counter overflows at `2147483647` (2038-01-19 03:14:07 UTC). It contains
//! the pure countdown calculator and the clock effect used to sample the
//! current instant; rendering lives in `unixy2k-cli`.
//!
//! # Layout
//!
//! - [`countdown`]: `TimeStatus`, `RemainingTime`, and `compute_status`
//! - [`clock`]: `PhysicalClock` effect with system and fixed handlers
//! - [`errors`]: `TimeError`
//!
//! # Determinism
//!
//! `compute_status` is a pure function of its input instant. The breakdown
//! uses Julian years (365.25 days) and twelfths of a year for months, applied
//! in floating point in a fixed order, so output is reproducible bit for bit.

#![forbid(unsafe_code)]

/// Clock effect trait and handlers
pub mod clock;

/// Countdown calculator
pub mod countdown;

/// Error types
pub mod errors;

pub use clock::{FixedClock, PhysicalClock, SystemClock};
pub use countdown::{
    binary_octets, compute_status, decompose_remaining, status_from_clock, target_instant,
    RemainingTime, TimeStatus, TARGET_EPOCH,
};
pub use errors::{TimeError, TimeResult};
