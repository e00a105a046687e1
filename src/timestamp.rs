//! Timestamp assembly
//!
//! Cronometer exports carry the date and the time of day in separate columns.
//! They are joined and read with a single fixed layout in the caller's zone.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::{ImportError, ImportResult};

/// Layout of the joined "Day Time" string
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Time of day used when a row leaves the Time column empty
pub const DEFAULT_TIME: &str = "00:00";

/// Byte offsets of the separators in "YYYY-MM-DD HH:MM"
const LAYOUT_LEN: usize = 16;
const SEPARATORS: [(usize, u8); 4] = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':')];

/// Substitute the midnight default for an empty time of day
pub fn time_or_default(time: &str) -> &str {
    if time.is_empty() {
        DEFAULT_TIME
    } else {
        time
    }
}

/// Join `date` and `time` and interpret the result in `zone`
///
/// `time` must already be non-empty; see [`time_or_default`].
pub fn assemble(date: &str, time: &str, zone: Tz) -> ImportResult<DateTime<Tz>> {
    let combined = format!("{} {}", date, time);
    let fail = |reason: String| ImportError::Timestamp {
        value: combined.clone(),
        zone: zone.name().to_string(),
        reason,
    };

    check_layout(&combined).map_err(|reason| fail(reason.to_string()))?;

    let naive = NaiveDateTime::parse_from_str(&combined, DATE_TIME_FORMAT)
        .map_err(|e| fail(e.to_string()))?;

    Ok(localize(naive, zone))
}

/// Fixed width, ASCII digits everywhere except the separators
fn check_layout(s: &str) -> Result<(), &'static str> {
    let bytes = s.as_bytes();
    if bytes.len() != LAYOUT_LEN {
        return Err("expected YYYY-MM-DD HH:MM");
    }

    for (i, b) in bytes.iter().enumerate() {
        match SEPARATORS.iter().find(|(pos, _)| *pos == i) {
            Some((_, sep)) if b != sep => return Err("unexpected separator"),
            Some(_) => {}
            None if !b.is_ascii_digit() => return Err("expected a digit"),
            None => {}
        }
    }

    Ok(())
}

/// Attach `zone` to a wall-clock time
///
/// Ambiguous times (autumn fold) take the earlier instant. Times inside a
/// spring-forward gap use the offset in force before the transition.
fn localize(naive: NaiveDateTime, zone: Tz) -> DateTime<Tz> {
    if let Some(dt) = zone.from_local_datetime(&naive).earliest() {
        return dt;
    }

    let before = naive - Duration::days(1);
    let offset_secs = zone
        .offset_from_local_datetime(&before)
        .earliest()
        .map(|o| o.fix().local_minus_utc())
        .unwrap_or(0);
    let utc = naive - Duration::seconds(i64::from(offset_secs));

    zone.from_utc_datetime(&utc)
}
