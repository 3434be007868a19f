use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::error::CoreError;
use crate::models::transaction::TimestampValue;

/// Shown for epoch values that do not map to a representable instant.
pub const INVALID_DATE: &str = "Invalid Date";

/// `d/m/yyyy, HH.MM.SS`, the `id-ID` date-time shape.
const ID_DATE_TIME: &str = "%-d/%-m/%Y, %H.%M.%S";

/// Render a sale timestamp. Text passes through untouched; epoch
/// milliseconds are shown in `tz`.
pub fn format_timestamp(value: &TimestampValue, tz: &TimeZone) -> String {
    match value {
        TimestampValue::Text(text) => text.clone(),
        TimestampValue::Epoch(millis) => format_epoch_millis(*millis, tz),
    }
}

/// Instants outside years -9999..=9999 render as [`INVALID_DATE`].
pub fn format_epoch_millis(millis: f64, tz: &TimeZone) -> String {
    if !millis.is_finite() {
        return INVALID_DATE.to_string();
    }
    // Saturating cast; anything outside jiff's range is rejected below.
    match Timestamp::from_millisecond(millis.trunc() as i64) {
        Ok(ts) => ts.to_zoned(tz.clone()).strftime(ID_DATE_TIME).to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Look up the zone used to display epoch timestamps.
pub fn display_time_zone(name: &str) -> Result<TimeZone, CoreError> {
    if name.eq_ignore_ascii_case("utc") {
        return Ok(TimeZone::UTC);
    }
    TimeZone::get(name).map_err(|e| CoreError::InvalidTimeZone {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
