//! Wall clock behavior and backward clock jumps

use crate::generator::ManualClock;
use crate::tests::test_utils::{assert_ids_monotonic, config_with};
use crate::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_timestamp_reflects_wall_clock() {
    let g = SnowflakeGenerator::new();
    let before = unix_time_ms();
    let id = g.next_id(&[]);
    let after = unix_time_ms();

    let created = id.create_time();
    assert!(created >= before && created <= after);
}

#[test]
fn test_timestamp_advances_with_real_sleep() {
    let g = SnowflakeGenerator::new();
    let ts1 = g.next_id(&[]).timestamp();
    thread::sleep(Duration::from_millis(100));
    let ts2 = g.next_id(&[]).timestamp();

    let diff = ts2 - ts1;
    assert!((90..=250).contains(&diff), "Expected ~100ms, got {}ms", diff);
}

#[test]
fn test_wait_next_millis_progresses() {
    let g = SnowflakeGenerator::new();
    let from = g.now_ms();
    let next = g.wait_next_millis(from);
    assert!(next > from);
}

#[test]
fn test_wait_next_millis_progresses_no_spin() {
    let cfg = SnowflakeConfig::builder()
        .enable_spin(false)
        .spin_loops(0)
        .spin_yield_every(0)
        .build()
        .unwrap();
    let g = SnowflakeGenerator::with_config(cfg);
    let from = g.now_ms();
    let next = g.wait_next_millis(from);
    assert!(next > from);
}

#[test]
fn test_clock_regression_holds_last_timestamp() {
    let clock = ManualClock::new(1_000);
    let g = SnowflakeGenerator::with_clock(config_with(12, &[]), clock.clone());

    let first = g.next_id(&[]);
    clock.set(990);
    let second = g.next_id(&[]);
    let third = g.next_id(&[]);

    assert_eq!(second.timestamp(), 1_000);
    assert_eq!(second.sequence(), 1);
    assert_eq!(third.sequence(), 2);
    assert_ids_monotonic(&[first, second, third]);
}

#[test]
fn test_clock_regression_with_exhausted_sequence_waits() {
    let clock = ManualClock::new(1_000);
    let g = Arc::new(SnowflakeGenerator::with_clock(config_with(1, &[]), clock.clone()));

    let a = g.next_id(&[]);
    let b = g.next_id(&[]);
    clock.set(900);

    let waiter = {
        let g = Arc::clone(&g);
        thread::spawn(move || g.next_id(&[]))
    };

    thread::sleep(Duration::from_millis(30));
    assert!(!waiter.is_finished());

    // catching up to the last timestamp is not enough
    clock.set(1_000);
    thread::sleep(Duration::from_millis(30));
    assert!(!waiter.is_finished());

    clock.set(1_001);
    let c = waiter.join().unwrap();
    assert_eq!(c.timestamp(), 1_001);
    assert_eq!(c.sequence(), 0);
    assert_ids_monotonic(&[a, b, c]);
}

#[test]
fn test_timestamps_across_generator_restart() {
    let g1 = SnowflakeGenerator::new();
    let ts1 = g1.next_id(&[]).timestamp();
    thread::sleep(Duration::from_millis(50));

    let g2 = SnowflakeGenerator::new();
    let ts2 = g2.next_id(&[]).timestamp();

    assert!(ts2 > ts1 && ts2 - ts1 >= 40, "Expected ~50ms diff");
}
