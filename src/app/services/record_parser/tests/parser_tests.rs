//! Tests for the dataset assembly behavior of the parser

use super::row;
use crate::Error;
use crate::app::services::record_parser::parse_records;
use crate::constants::OBSERVATION_TZ;
use chrono::TimeZone;

#[test]
fn test_single_row_builds_single_entry() {
    let text = row("20200201", "1", "成田", "5");
    let dataset = parse_records(&text).unwrap();

    assert_eq!(dataset.station_count(), 1);
    let entry = dataset.get("成田").unwrap();
    assert_eq!(entry.name, "成田");
    assert_eq!(entry.observations.len(), 1);

    let observation = &entry.observations[0];
    assert_eq!(observation.count, 5);
    assert_eq!(
        observation.timestamp,
        OBSERVATION_TZ.with_ymd_and_hms(2020, 2, 1, 1, 0, 0).unwrap()
    );
}

#[test]
fn test_rows_group_by_station_in_input_order() {
    let text = [
        row("20200201", "1", "新宿", "12"),
        row("20200201", "1", "成田", "5"),
        row("20200201", "2", "新宿", "0"),
        row("20200201", "3", "新宿", "44"),
    ]
    .join("\n");

    let dataset = parse_records(&text).unwrap();
    assert_eq!(dataset.station_count(), 2);

    let shinjuku = dataset.get("新宿").unwrap();
    let counts: Vec<u32> = shinjuku.observations.iter().map(|o| o.count).collect();
    assert_eq!(counts, vec![12, 0, 44]);

    assert_eq!(dataset.get("成田").unwrap().observations.len(), 1);
}

#[test]
fn test_duplicate_rows_are_kept() {
    let text = [
        row("20200201", "1", "成田", "5"),
        row("20200201", "1", "成田", "5"),
    ]
    .join("\n");

    let dataset = parse_records(&text).unwrap();
    assert_eq!(dataset.get("成田").unwrap().observations.len(), 2);
}

#[test]
fn test_hour_24_rolls_into_next_day() {
    let text = row("20200201", "24", "成田", "5");
    let dataset = parse_records(&text).unwrap();

    let observation = &dataset.get("成田").unwrap().observations[0];
    assert_eq!(
        observation.timestamp,
        OBSERVATION_TZ.with_ymd_and_hms(2020, 2, 2, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_short_row_aborts_whole_parse() {
    // second row has too few fields; the valid first row must not leak out
    let text = format!("{}\n1,2,3", row("20200201", "1", "成田", "5"));
    let err = parse_records(&text).unwrap_err();

    match err {
        Error::MalformedRow { row, reason } => {
            assert_eq!(row, 2);
            assert!(reason.contains("found 3"), "reason: {reason}");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn test_non_numeric_hour_names_the_column() {
    let text = row("20200201", "noon", "成田", "5");
    let err = parse_records(&text).unwrap_err();

    assert!(matches!(err, Error::MalformedRow { row: 1, .. }));
    let message = err.to_string();
    assert!(message.contains("column 4"), "message: {message}");
    assert!(message.contains("noon"), "message: {message}");
}

#[test]
fn test_non_numeric_count_names_the_column() {
    let text = row("20200201", "1", "成田", "many");
    let err = parse_records(&text).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("column 11"), "message: {message}");
    assert!(message.contains("many"), "message: {message}");
}

#[test]
fn test_negative_count_is_rejected() {
    let text = row("20200201", "1", "成田", "-1");
    let err = parse_records(&text).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { .. }));
}

#[test]
fn test_malformed_date_names_the_column() {
    let text = row("2020-02-01", "1", "成田", "5");
    let err = parse_records(&text).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("column 3"), "message: {message}");
    assert!(message.contains("2020-02-01"), "message: {message}");
}

#[test]
fn test_empty_input_yields_empty_dataset() {
    let dataset = parse_records("").unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.observation_count(), 0);
}
