#![allow(missing_docs, clippy::unwrap_used, clippy::expect_used)]
//! Countdown property tests
//!
//! Checks the calculator invariants over arbitrary instants:
//! - Remaining time never increases as the clock advances toward the target
//! - Binary octets always encode the low 32 bits of the epoch value
//! - The calculator is idempotent for a given instant

use chrono::DateTime;
use proptest::prelude::*;
use unixy2k_core::{
    binary_octets, compute_status, decompose_remaining, status_from_clock, FixedClock,
    TimeStatus, TARGET_EPOCH,
};

fn status_at(epoch: i64) -> TimeStatus {
    compute_status(DateTime::from_timestamp(epoch, 0).unwrap())
}

proptest! {
    #[test]
    fn remaining_is_monotonic_toward_target(
        a in 0i64..=TARGET_EPOCH,
        b in 0i64..=TARGET_EPOCH,
    ) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let before = status_at(earlier).remaining;
        let after = status_at(later).remaining;
        prop_assert!(before.as_tuple() >= after.as_tuple());
        if earlier < later {
            prop_assert_ne!(before, after);
        }
    }

    #[test]
    fn components_stay_within_unit_bounds(epoch in 0i64..=TARGET_EPOCH) {
        let r = status_at(epoch).remaining;
        prop_assert!(r.years >= 0);
        prop_assert!((0..12).contains(&r.months));
        prop_assert!((0..31).contains(&r.days));
        prop_assert!((0..24).contains(&r.hours));
        prop_assert!((0..60).contains(&r.minutes));
        prop_assert!((0..60).contains(&r.seconds));
    }

    #[test]
    fn binary_octets_round_trip(epoch in -(1i64 << 40)..(1i64 << 40)) {
        let octets = binary_octets(epoch);
        for octet in &octets {
            prop_assert_eq!(octet.len(), 8);
            prop_assert!(octet.chars().all(|c| c == '0' || c == '1'));
        }
        let parsed = u32::from_str_radix(&octets.concat(), 2).unwrap();
        prop_assert_eq!(i64::from(parsed), epoch.rem_euclid(1i64 << 32));
    }

    #[test]
    fn elapsed_only_after_target_second(epoch in -(1i64 << 36)..(1i64 << 36)) {
        prop_assert_eq!(status_at(epoch).remaining.is_elapsed(), epoch > TARGET_EPOCH);
    }

    #[test]
    fn compute_status_is_idempotent(epoch in -(1i64 << 36)..(1i64 << 36)) {
        prop_assert_eq!(status_at(epoch), status_at(epoch));
    }
}

#[test]
fn low_word_of_two_to_the_32_is_zero() {
    let status = status_at(4_294_967_296);
    assert_eq!(status.epoch_seconds, 4_294_967_296);
    assert_eq!(status.binary_text(), "00000000 00000000 00000000 00000000");
}

#[test]
fn decompose_matches_compute_status() {
    let epoch = 1_234_567_890;
    assert_eq!(
        decompose_remaining((TARGET_EPOCH - epoch) as f64),
        status_at(epoch).remaining
    );
}

#[tokio::test]
async fn status_from_fixed_clock() {
    let clock = FixedClock::from_epoch(TARGET_EPOCH - 1).unwrap();
    let status = status_from_clock(&clock).await.unwrap();
    assert_eq!(status.utc_text, "2038-01-19 03:14:06");
    assert_eq!(
        status.remaining.to_string(),
        "0 years, 0 months, 0 days, 0 hours, 0 minutes, 1 seconds"
    );

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["epoch_seconds"], TARGET_EPOCH - 1);
    assert_eq!(json["remaining"]["seconds"], 1);
    assert_eq!(json["binary_octets"][3], "11111110");
}
