//! Application constants for the Hanako fetcher
//!
//! This module contains the download endpoint definition, the browser
//! session headers replayed with every request, and the layout of the
//! observation CSV rows served by the endpoint.

use chrono_tz::Tz;

// =============================================================================
// Download Endpoint
// =============================================================================

/// Data-export endpoint of the Hanako pollen monitoring site
pub const DOWNLOAD_ENDPOINT: &str = "http://kafun.taiki.go.jp/DownLoad1.aspx";

/// Referer sent with the form replay; the capture was taken from the
/// download page itself
pub const REFERER: &str = "http://kafun.taiki.go.jp/DownLoad1.aspx";

// =============================================================================
// Browser Session Headers
// =============================================================================

/// User agent of the browser session the form submission was captured from
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:73.0) Gecko/20100101 Firefox/73.0";

pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

pub const ACCEPT_LANGUAGE: &str = "ja,en;q=0.5";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub const UPGRADE_INSECURE_REQUESTS: &str = "1";

// =============================================================================
// Observation Row Layout
// =============================================================================

/// 1-based column positions in a downloaded observation row
///
/// The export has no header row. Every row nominally carries
/// [`ROW_FIELD_COUNT`] comma-separated fields; only the date, hour, station
/// name, and pollen count columns are consumed here.
pub mod columns {
    /// Monitoring station code
    pub const STATION_CODE: usize = 1;
    /// AMeDAS weather station code
    pub const AMEDAS_CODE: usize = 2;
    /// Observation date, YYYYMMDD
    pub const DATE: usize = 3;
    /// Observation hour; the feed uses 1 through 24
    pub const HOUR: usize = 4;
    /// Station name, the grouping key
    pub const STATION_NAME: usize = 5;
    /// Station siting (1 urban, 2 mountainous, 0 unclassified)
    pub const STATION_TYPE: usize = 6;
    /// Prefecture code, 01 through 47
    pub const PREFECTURE_CODE: usize = 7;
    /// Prefecture name
    pub const PREFECTURE_NAME: usize = 8;
    /// Five-digit municipality code
    pub const MUNICIPALITY_CODE: usize = 9;
    /// Municipality name
    pub const MUNICIPALITY_NAME: usize = 10;
    /// Airborne pollen count per cubic metre
    pub const POLLEN_COUNT: usize = 11;
    /// Wind direction, sixteen-point compass code
    pub const WIND_DIRECTION: usize = 12;
    /// Wind speed in m/s
    pub const WIND_SPEED: usize = 13;
    /// Air temperature in degrees Celsius
    pub const TEMPERATURE: usize = 14;
    /// Precipitation in mm
    pub const PRECIPITATION: usize = 15;
    /// Radar-derived precipitation in mm
    pub const RADAR_PRECIPITATION: usize = 16;
}

/// Nominal field count of a full observation row
pub const ROW_FIELD_COUNT: usize = 16;

/// Minimum fields a row must carry to be parseable; the pollen count is the
/// right-most column consumed
pub const MIN_ROW_FIELDS: usize = columns::POLLEN_COUNT;

// =============================================================================
// Timestamp Handling
// =============================================================================

/// Date format of the observation date column
pub const DATE_FORMAT: &str = "%Y%m%d";

/// All observation timestamps are local to the monitoring network
pub const OBSERVATION_TZ: Tz = chrono_tz::Asia::Tokyo;
