//! Mapping between wall-clock time and positions on a day's time grid.
//!
//! The grid is a vertical strip of `24 * pixels_per_hour` pixels starting at
//! `day_start`. Pointer positions are quantised into slots of `slot_minutes`.
//! Every function here is pure.

use chrono::{DateTime, Duration, FixedOffset};

use crate::models::event::CalendarEvent;
use crate::models::settings::{LayoutSettings, MINUTES_PER_DAY};

const HOURS_PER_DAY: f32 = 24.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Pixel offset of `time` below `day_start`, clamped to the visible day.
pub fn time_to_y(
    time: DateTime<FixedOffset>,
    day_start: DateTime<FixedOffset>,
    pixels_per_hour: f32,
) -> f32 {
    let hours = (time - day_start).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    let y = (pixels_per_hour as f64 * hours) as f32;
    y.clamp(0.0, pixels_per_hour * HOURS_PER_DAY)
}

/// Index of the slot containing `offset`.
pub fn y_to_slot(offset: f32, slot_height: f32) -> i64 {
    (offset / slot_height).floor() as i64
}

pub fn slot_to_time(
    slot: i64,
    day_start: DateTime<FixedOffset>,
    slot_minutes: i64,
) -> DateTime<FixedOffset> {
    day_start + Duration::minutes(slot * slot_minutes)
}

/// Rendered height of a body spanning `duration`.
///
/// Short events are forced up to `min_body_height`, so two short adjacent
/// events can visually overlap even when their times do not.
pub fn body_height(duration: Duration, pixels_per_hour: f32, min_body_height: f32) -> f32 {
    let hours = duration.num_milliseconds().max(0) as f64 / MILLIS_PER_HOUR;
    ((pixels_per_hour as f64 * hours) as f32).max(min_body_height)
}

/// Geometry of one day's rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    pub day_start: DateTime<FixedOffset>,
    pub pixels_per_hour: f32,
    pub slot_minutes: i64,
    pub min_body_height: f32,
}

impl TimeGrid {
    pub fn new(day_start: DateTime<FixedOffset>, settings: &LayoutSettings) -> Self {
        Self {
            day_start,
            pixels_per_hour: settings.pixels_per_hour,
            slot_minutes: settings.slot_minutes,
            min_body_height: settings.min_body_height,
        }
    }

    pub fn day_end(&self) -> DateTime<FixedOffset> {
        self.day_start + Duration::days(1)
    }

    pub fn height(&self) -> f32 {
        self.pixels_per_hour * HOURS_PER_DAY
    }

    pub fn slot_height(&self) -> f32 {
        self.pixels_per_hour * self.slot_minutes as f32 / 60.0
    }

    pub fn slots_per_day(&self) -> i64 {
        MINUTES_PER_DAY / self.slot_minutes
    }

    pub fn time_to_y(&self, time: DateTime<FixedOffset>) -> f32 {
        time_to_y(time, self.day_start, self.pixels_per_hour)
    }

    pub fn y_to_slot(&self, offset: f32) -> i64 {
        y_to_slot(offset, self.slot_height())
    }

    pub fn slot_to_time(&self, slot: i64) -> DateTime<FixedOffset> {
        slot_to_time(slot, self.day_start, self.slot_minutes)
    }

    /// Slot for a pointer offset, kept inside the day.
    pub fn clamped_slot(&self, offset: f32) -> i64 {
        self.y_to_slot(offset).clamp(0, self.slots_per_day() - 1)
    }

    /// Slot whose start boundary is nearest to `offset`, kept inside the day.
    pub fn nearest_slot(&self, offset: f32) -> i64 {
        self.clamped_slot(offset + self.slot_height() / 2.0)
    }

    /// Slot boundary nearest to `offset`. The bottom edge of the grid
    /// (`slots_per_day`) is a valid boundary, so an end can land on midnight.
    pub fn nearest_boundary(&self, offset: f32) -> i64 {
        self.y_to_slot(offset + self.slot_height() / 2.0)
            .clamp(0, self.slots_per_day())
    }

    /// Top offset of an event, clamped to the day.
    pub fn event_top(&self, event: &CalendarEvent) -> f32 {
        self.time_to_y(event.start)
    }

    /// Height of an event's body, using only the part inside the day.
    pub fn event_height(&self, event: &CalendarEvent) -> f32 {
        let start = event.start.max(self.day_start);
        let end = event.end.min(self.day_end());
        body_height(end - start, self.pixels_per_hour, self.min_body_height)
    }
}
