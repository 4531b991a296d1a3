//! Typed conversion of the consumed observation columns.
//!
//! Errors carry the 1-based row and column together with the raw value, so
//! a bad export is diagnosable from the message alone.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use csv::StringRecord;

use crate::constants::{DATE_FORMAT, OBSERVATION_TZ, columns};
use crate::{Error, Result};

/// Get a field by its 1-based column position
fn field<'a>(record: &'a StringRecord, row: usize, column: usize) -> Result<&'a str> {
    record
        .get(column - 1)
        .ok_or_else(|| Error::malformed_row(row, format!("missing field {column}")))
}

/// Combine the date and hour columns into one local timestamp
///
/// The date parses as YYYYMMDD at midnight local time; the hour column is
/// then ADDED as a whole-hour offset rather than parsed into the time of
/// day. The feed labels the last hour of a day as 24, which rolls into
/// midnight of the next day and is preserved as such.
pub fn parse_timestamp(record: &StringRecord, row: usize) -> Result<DateTime<Tz>> {
    let raw_date = field(record, row, columns::DATE)?;
    let date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT).map_err(|e| {
        Error::malformed_field(row, columns::DATE, raw_date, format!("invalid date: {e}"))
    })?;

    let raw_hour = field(record, row, columns::HOUR)?;
    let hour: i64 = raw_hour.trim().parse().map_err(|e| {
        Error::malformed_field(row, columns::HOUR, raw_hour, format!("invalid hour: {e}"))
    })?;

    let midnight = OBSERVATION_TZ
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .ok_or_else(|| {
            Error::malformed_field(
                row,
                columns::DATE,
                raw_date,
                "date is not representable in the observation time zone",
            )
        })?;

    Duration::try_hours(hour)
        .and_then(|offset| midnight.checked_add_signed(offset))
        .ok_or_else(|| {
            Error::malformed_field(row, columns::HOUR, raw_hour, "hour offset out of range")
        })
}

/// Get the station name column, the grouping key
pub fn station_name<'a>(record: &'a StringRecord, row: usize) -> Result<&'a str> {
    field(record, row, columns::STATION_NAME)
}

/// Parse the pollen count column as a non-negative integer
pub fn parse_count(record: &StringRecord, row: usize) -> Result<u32> {
    let raw = field(record, row, columns::POLLEN_COUNT)?;
    raw.trim().parse::<u32>().map_err(|e| {
        Error::malformed_field(
            row,
            columns::POLLEN_COUNT,
            raw,
            format!("invalid pollen count: {e}"),
        )
    })
}
