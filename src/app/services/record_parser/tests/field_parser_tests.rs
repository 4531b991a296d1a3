//! Tests for typed field conversion

use crate::Error;
use crate::app::services::record_parser::field_parsers::{
    parse_count, parse_timestamp, station_name,
};
use crate::constants::OBSERVATION_TZ;
use chrono::TimeZone;
use csv::StringRecord;

fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_timestamp_combines_date_and_hour() {
    let rec = record(&["a", "b", "20200215", "13", "成田"]);
    let timestamp = parse_timestamp(&rec, 1).unwrap();
    assert_eq!(
        timestamp,
        OBSERVATION_TZ
            .with_ymd_and_hms(2020, 2, 15, 13, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_timestamp_hour_zero_stays_on_the_date() {
    let rec = record(&["a", "b", "20200215", "0", "成田"]);
    let timestamp = parse_timestamp(&rec, 1).unwrap();
    assert_eq!(
        timestamp,
        OBSERVATION_TZ
            .with_ymd_and_hms(2020, 2, 15, 0, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_timestamp_hour_24_advances_one_day() {
    let rec = record(&["a", "b", "20191231", "24", "成田"]);
    let timestamp = parse_timestamp(&rec, 1).unwrap();
    assert_eq!(
        timestamp,
        OBSERVATION_TZ.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_timestamp_rejects_bad_date() {
    let rec = record(&["a", "b", "20200231", "1", "成田"]);
    let err = parse_timestamp(&rec, 7).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { row: 7, .. }));
}

#[test]
fn test_timestamp_rejects_bad_hour() {
    let rec = record(&["a", "b", "20200201", "1st", "成田"]);
    let err = parse_timestamp(&rec, 3).unwrap_err();
    assert!(err.to_string().contains("column 4"));
}

#[test]
fn test_station_name_is_returned_verbatim() {
    let rec = record(&["a", "b", "20200201", "1", "さいたま市"]);
    assert_eq!(station_name(&rec, 1).unwrap(), "さいたま市");
}

#[test]
fn test_count_parses_zero_and_large_values() {
    let zero = record(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "0"]);
    assert_eq!(parse_count(&zero, 1).unwrap(), 0);

    let large = record(&[
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "1000000",
    ]);
    assert_eq!(parse_count(&large, 1).unwrap(), 1_000_000);
}

#[test]
fn test_count_rejects_non_numeric_value() {
    let rec = record(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "n/a"]);
    let err = parse_count(&rec, 2).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("column 11"), "message: {message}");
    assert!(message.contains("n/a"), "message: {message}");
}
