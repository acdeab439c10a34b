//! Serial number to date conversion

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tintable_core::CellValue;

/// Largest serial Excel can display (9999-12-31)
const MAX_SERIAL: f64 = 2_958_465.999_999;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Value of a number carrying a date or time format
///
/// Serials in `[0, 1)` have no date part and become a time of day; the
/// rest become date-times. Elapsed-time formats give a duration instead.
pub(crate) fn serial_to_value(serial: f64, date1904: bool, elapsed: bool) -> Option<CellValue> {
    if elapsed {
        serial_to_duration(serial).map(CellValue::Duration)
    } else if (0.0..1.0).contains(&serial) {
        serial_to_time(serial).map(CellValue::Time)
    } else {
        serial_to_datetime(serial, date1904).map(CellValue::Date)
    }
}

/// Time of day for a serial in `[0, 1)`
pub(crate) fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    if !(0.0..1.0).contains(&serial) {
        return None;
    }
    // Rounding up to a full day wraps to midnight
    let millis = (serial * MILLIS_PER_DAY).round() as i64;
    Some(
        NaiveTime::MIN
            .overflowing_add_signed(Duration::milliseconds(millis))
            .0,
    )
}

/// Elapsed time for a non-negative serial
pub(crate) fn serial_to_duration(serial: f64) -> Option<Duration> {
    if !serial.is_finite() || serial < 0.0 || serial > MAX_SERIAL {
        return None;
    }
    Some(Duration::milliseconds((serial * MILLIS_PER_DAY).round() as i64))
}

/// Convert an Excel serial date to a date-time
///
/// The 1900 system keeps Excel's fictional 1900-02-29: serials from 1 up to
/// 60 are shifted by one day so that serial 1 is 1900-01-01 and serial 61
/// is 1900-03-01. Returns `None` for negative or out-of-range serials.
pub(crate) fn serial_to_datetime(serial: f64, date1904: bool) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > MAX_SERIAL {
        return None;
    }

    let epoch = if date1904 {
        NaiveDate::from_ymd_opt(1904, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    }
    .and_hms_opt(0, 0, 0)?;

    let mut days = serial.trunc() as i64;
    if !date1904 && (1.0..60.0).contains(&serial) {
        days += 1;
    }

    let millis = (serial.fract() * MILLIS_PER_DAY).round() as i64;

    epoch
        .checked_add_signed(Duration::days(days))?
        .checked_add_signed(Duration::milliseconds(millis))
}

/// Parse the ISO 8601 value of a `t="d"` cell
pub(crate) fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_end_matches('Z');
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
