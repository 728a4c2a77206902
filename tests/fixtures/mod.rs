// Test fixtures - reusable test data
// Provides consistent events and grids across all test files
#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset};
use day_layout::models::event::CalendarEvent;
use day_layout::models::settings::LayoutSettings;
use day_layout::services::geometry::TimeGrid;

/// Midnight, Friday 1 March 2024, in UTC-5
pub fn day_start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-03-01T00:00:00-05:00").unwrap()
}

/// Wall-clock time on the fixture day
pub fn at(hour: i64, minute: i64) -> DateTime<FixedOffset> {
    day_start() + Duration::hours(hour) + Duration::minutes(minute)
}

pub fn event(id: &str, start: (i64, i64), end: (i64, i64)) -> CalendarEvent {
    CalendarEvent::builder()
        .id(id)
        .title(id)
        .account_id("work@example.com")
        .start(at(start.0, start.1))
        .end(at(end.0, end.1))
        .build()
        .unwrap()
}

/// Event starting `start_minute` minutes after midnight and lasting `minutes`
pub fn event_at_minute(id: &str, start_minute: i64, minutes: i64) -> CalendarEvent {
    let start = day_start() + Duration::minutes(start_minute);
    CalendarEvent::new(id, id, start, start + Duration::minutes(minutes))
}

pub fn settings() -> LayoutSettings {
    LayoutSettings::default()
}

pub fn grid() -> TimeGrid {
    TimeGrid::new(day_start(), &settings())
}

pub fn minimum() -> Duration {
    settings().minimum_event_duration()
}

/// Backend-shaped JSON for a small day, including corrupt records
pub const BACKEND_DAY_JSON: &str = r#"[
    {
        "id": "standup",
        "title": "Standup",
        "account_id": "work@example.com",
        "datetime_start": "2024-03-01T09:00:00.000-05:00",
        "datetime_end": "2024-03-01T09:30:00.000-05:00",
        "can_modify": true,
        "conference_call": {"url": "https://meet.example.com/abc"}
    },
    {
        "id": "review",
        "title": "Design review",
        "account_id": "work@example.com",
        "datetime_start": "2024-03-01T09:15:00.000-05:00",
        "datetime_end": "2024-03-01T09:45:00.000-05:00",
        "can_modify": false
    },
    {
        "id": "lunch",
        "title": "Lunch",
        "datetime_start": "2024-03-01T10:00:00.000-05:00",
        "datetime_end": "2024-03-01T10:30:00.000-05:00"
    },
    {
        "id": "broken",
        "title": "Corrupt",
        "datetime_start": "not a time",
        "datetime_end": "2024-03-01T11:00:00.000-05:00"
    },
    {
        "id": "epoch",
        "title": "Numeric start",
        "datetime_start": 1709301600,
        "datetime_end": "2024-03-01T12:00:00.000-05:00"
    },
    {
        "id": 17,
        "title": "Numeric id",
        "datetime_start": "2024-03-01T12:00:00.000-05:00",
        "datetime_end": "2024-03-01T12:30:00.000-05:00"
    },
    {
        "id": "no-end",
        "title": "Missing end",
        "datetime_start": "2024-03-01T11:00:00.000-05:00"
    }
]"#;
