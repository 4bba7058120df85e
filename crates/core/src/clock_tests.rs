// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_is_after_2020() {
    // 2020-01-01T00:00:00Z
    assert!(SystemClock.now_ms() > 1_577_836_800_000);
}

#[test]
fn manual_clock_set_and_advance() {
    let clock = ManualClock::new(1_000);
    assert_eq!(clock.now_ms(), 1_000);

    clock.advance(500);
    assert_eq!(clock.now_ms(), 1_500);

    clock.set(42);
    assert_eq!(clock.now_ms(), 42);
}

#[test]
fn now_converts_millis_to_datetime() {
    let clock = ManualClock::new(1_700_000_000_123);
    assert_eq!(clock.now().timestamp_millis(), 1_700_000_000_123);
}

#[test]
fn clock_by_reference() {
    let clock = ManualClock::new(7);
    let by_ref = &clock;
    assert_eq!(ClockSource::now_ms(&by_ref), 7);
}
