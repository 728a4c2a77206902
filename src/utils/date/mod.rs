// Date utility functions

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// First instant of `date` in `tz`, with the offset in force at that instant.
///
/// When midnight does not exist (a DST gap at 00:00) the first existing
/// minute after it is used; when it is ambiguous the earlier one wins.
pub fn day_start_in(date: NaiveDate, tz: &Tz) -> Option<DateTime<FixedOffset>> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return Some(start.fixed_offset());
    }

    // skip forward through the gap
    (1..=180)
        .map(|minutes| midnight + chrono::Duration::minutes(minutes))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|start| start.fixed_offset())
}
