//! Edge case tests for layouts and field values

use crate::generator::ManualClock;
use crate::tests::test_utils::config_with;
use crate::*;

/// Verify bit structure: fields | timestamp | sequence
#[test]
fn test_id_bit_structure() {
    let g = SnowflakeGenerator::with_clock(
        config_with(12, &[("unused", 1), ("machine", 10)]),
        ManualClock::new(0x1_2345),
    );
    let id = g.next_id(&[0, 0b1010101010]);
    let raw = id.to_u64();

    let seq_mask = 0xFFF; // 12 bits
    let ts_mask = ((1u64 << 41) - 1) << 12;
    let machine_mask = 0x3FFu64 << 53;

    assert_eq!(raw & seq_mask, id.sequence());
    assert_eq!((raw & ts_mask) >> 12, 0x1_2345);
    assert_eq!((raw & machine_mask) >> 53, 0b1010101010);
    assert_eq!(raw >> 63, 0);
}

#[test]
fn test_unchecked_overflow_bleeds_into_higher_field() {
    let g = SnowflakeGenerator::with_clock(
        config_with(12, &[("unused", 1), ("machine", 10)]),
        ManualClock::new(1),
    );
    let id = g.next_id(&[0, 1024]);
    assert_eq!(id.field("machine"), Some(1024));

    let reparsed = g.parse_i64(id.to_i64());
    assert_eq!(reparsed.field("machine"), Some(0));
    assert_eq!(reparsed.field("unused"), Some(1));
}

#[test]
fn test_checked_generation_rejects_overflow() {
    let g = SnowflakeGenerator::with_clock(
        config_with(12, &[("unused", 1), ("machine", 10)]),
        ManualClock::new(1),
    );

    let err = g.try_next_id(&[0, 1024]).unwrap_err();
    assert_eq!(
        err,
        SnowflakeError::FieldOverflow {
            name: "machine".to_string(),
            value: 1024,
            max: 1023,
        }
    );
    // nothing was claimed by the failed call
    assert_eq!(g.last_timestamp(), 0);

    let id = g.try_next_id(&[1, 1023]).unwrap();
    assert_eq!(id.sequence(), 0);
    assert_eq!(g.parse_i64(id.to_i64()), id);
}

#[test]
fn test_no_fields_layout() {
    let g = SnowflakeGenerator::with_clock(config_with(12, &[]), ManualClock::new(77));
    let id = g.next_id(&[5, 6]);
    assert!(id.fields().is_empty());
    assert_eq!(id.to_u64(), 77 << 12);
}

#[test]
fn test_zero_timestamp_bits_layout() {
    let g = SnowflakeGenerator::with_clock(config_with(12, &[("wide", 52)]), ManualClock::new(77));
    let id = g.next_id(&[(1 << 52) - 1]);
    let raw = id.to_u64();

    // timestamp has no room, only the field and sequence survive
    assert_eq!(raw, ((1u64 << 52) - 1) << 12);
    let parsed = g.parse_i64(id.to_i64());
    assert_eq!(parsed.timestamp(), 0);
    assert_eq!(parsed.field("wide"), Some((1 << 52) - 1));
}

#[test]
fn test_many_small_fields() {
    let fields: Vec<(String, u8)> = (0..10).map(|i| (format!("f{i}"), 3)).collect();
    let refs: Vec<(&str, u8)> = fields.iter().map(|(n, b)| (n.as_str(), *b)).collect();
    let g = SnowflakeGenerator::with_clock(config_with(10, &refs), ManualClock::new(3));
    assert_eq!(g.layout().timestamp_bits(), 24);

    let values: Vec<u64> = (0..10).map(|i| i % 8).collect();
    let id = g.next_id(&values);
    assert_eq!(g.parse_hex(&id.to_hex()).unwrap().fields(), values.as_slice());
}

#[test]
fn test_field_max_values() {
    let g = SnowflakeGenerator::with_clock(
        config_with(12, &[("unused", 1), ("machine", 10)]),
        ManualClock::new(1),
    );
    let id = g.next_id(&[1, 1023]);
    let raw = id.to_u64();
    assert_eq!(g.extract().field(raw, "unused"), Some(1));
    assert_eq!(g.extract().field(raw, "machine"), Some(1023));
    assert!(id.to_i64() < 0, "setting the top field uses the sign bit");
}

#[test]
fn test_field_values_do_not_disturb_timestamp_order() {
    let clock = ManualClock::new(10);
    let g = SnowflakeGenerator::with_clock(config_with(12, &[("machine", 10)]), clock.clone());
    let a = g.next_id(&[900]);
    clock.advance(1);
    let b = g.next_id(&[3]);
    assert!((b.timestamp(), b.sequence()) > (a.timestamp(), a.sequence()));
}
