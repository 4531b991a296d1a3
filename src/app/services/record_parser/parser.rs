//! Row iteration and dataset assembly.

use tracing::debug;

use super::field_parsers::{parse_count, parse_timestamp, station_name};
use crate::app::models::{Dataset, Observation};
use crate::constants::MIN_ROW_FIELDS;
use crate::{Error, Result};

/// Parse decoded observation text into a station-keyed dataset
///
/// Rows must carry at least [`MIN_ROW_FIELDS`] fields; the pollen count is
/// the right-most column consumed. Any malformed row aborts the parse.
pub fn parse_records(text: &str) -> Result<Dataset> {
    let mut dataset = Dataset::new();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut row = 0usize;
    for result in reader.records() {
        row += 1;

        let record =
            result.map_err(|e| Error::malformed_row(row, format!("unreadable record: {e}")))?;

        if record.len() < MIN_ROW_FIELDS {
            return Err(Error::malformed_row(
                row,
                format!(
                    "expected at least {} fields, found {}",
                    MIN_ROW_FIELDS,
                    record.len()
                ),
            ));
        }

        let timestamp = parse_timestamp(&record, row)?;
        let name = station_name(&record, row)?;
        let count = parse_count(&record, row)?;

        dataset.record(name, Observation { timestamp, count });
    }

    debug!(
        "parsed {} observations across {} stations from {} rows",
        dataset.observation_count(),
        dataset.station_count(),
        row
    );

    Ok(dataset)
}
