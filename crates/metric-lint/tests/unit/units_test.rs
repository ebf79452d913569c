//! Tests for unit detection

use metric_lint::{LintError, UnitEntry, UnitTable};

#[test]
fn test_base_unit_detected_as_base() {
    let table = UnitTable::default();
    let found = table.detect("request_seconds_total").unwrap();
    assert_eq!(found.unit, "seconds");
    assert_eq!(found.base, "seconds");
    assert!(found.is_base());
}

#[test]
fn test_derived_unit_maps_to_base() {
    let table = UnitTable::default();
    let found = table.detect("request_hours_total").unwrap();
    assert_eq!(found.unit, "hours");
    assert_eq!(found.base, "seconds");
    assert!(!found.is_base());
}

#[test]
fn test_prefixed_base_unit_is_not_base() {
    let table = UnitTable::default();
    let found = table.detect("request_milliseconds").unwrap();
    assert_eq!(found.unit, "milliseconds");
    assert_eq!(found.base, "seconds");
    assert!(!found.is_base());
}

#[test]
fn test_no_unit() {
    let table = UnitTable::default();
    assert!(table.detect("queue_depth").is_none());
    assert!(table.detect("").is_none());
}

#[test]
fn test_segment_must_match_exactly() {
    let table = UnitTable::default();
    assert!(table.detect("kilo_requests").is_none());
    assert!(table.detect("secondsish_total").is_none());
    assert!(table.detect("hoursecond").is_none());
}

#[test]
fn test_first_match_follows_table_order_not_position() {
    let table = UnitTable::default();
    // `bytes` precedes `bits` in the table, so the later segment wins
    let found = table.detect("disk_bits_bytes").unwrap();
    assert_eq!(found.unit, "bytes");

    // prefixed forms are tried before the bare unit
    let found = table.detect("latency_seconds_milliseconds").unwrap();
    assert_eq!(found.unit, "milliseconds");
}

#[test]
fn test_bare_unit_tried_after_every_prefix() {
    let table = UnitTable::default();
    let found = table.detect("request_seconds_microseconds").unwrap();
    assert_eq!(found.unit, "microseconds");
    assert_eq!(found.base, "seconds");
    assert!(!found.is_base());

    // without prefixes the bare unit is the only candidate
    let table = UnitTable {
        prefixes: Vec::new(),
        ..UnitTable::default()
    };
    let found = table.detect("request_seconds_microseconds").unwrap();
    assert_eq!(found.unit, "seconds");
    assert!(found.is_base());
}

#[test]
fn test_abbreviations() {
    let table = UnitTable::default();
    assert!(table.is_abbreviation("ms"));
    assert!(table.is_abbreviation("kb"));
    assert!(!table.is_abbreviation("requests"));
}

#[test]
fn test_default_table_is_valid() {
    assert!(UnitTable::default().validate().is_ok());
}

#[test]
fn test_empty_words_rejected() {
    let mut table = UnitTable::default();
    table.units.push(UnitEntry {
        unit: String::new(),
        base: "seconds".to_string(),
    });
    assert!(matches!(table.validate(), Err(LintError::InvalidTable(_))));

    let mut table = UnitTable::default();
    table.prefixes.push(String::new());
    assert!(matches!(table.validate(), Err(LintError::InvalidTable(_))));

    let mut table = UnitTable::default();
    table.abbreviations.push(String::new());
    assert!(matches!(table.validate(), Err(LintError::InvalidTable(_))));
}
