// Settings module
// Layout and drag-and-drop tuning for one day grid

use chrono::Duration;
use serde::{Deserialize, Serialize};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Drag/drop quantisation step
    pub slot_minutes: i64,
    pub pixels_per_hour: f32,
    /// Short events are never drawn shorter than this
    pub min_body_height: f32,
    /// Events shorter than this are stretched for overlap tests
    pub minimum_event_minutes: i64,
    /// Length of events created by dropping a task
    pub default_event_minutes: i64,
    /// IANA zone used to find the start of a calendar day
    pub timezone: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            slot_minutes: 15,
            pixels_per_hour: 120.0,
            min_body_height: 30.0,
            minimum_event_minutes: 15,
            default_event_minutes: 30,
            timezone: "UTC".to_string(),
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.slot_minutes <= 0 {
            return Err("Slot length must be positive".to_string());
        }
        if MINUTES_PER_DAY % self.slot_minutes != 0 {
            return Err(format!(
                "Slot length of {} minutes does not divide a day",
                self.slot_minutes
            ));
        }
        if !(self.pixels_per_hour.is_finite() && self.pixels_per_hour > 0.0) {
            return Err("Pixels per hour must be a positive number".to_string());
        }
        if !(self.min_body_height.is_finite() && self.min_body_height >= 0.0) {
            return Err("Minimum event height cannot be negative".to_string());
        }
        if self.minimum_event_minutes <= 0 {
            return Err("Minimum event length must be positive".to_string());
        }
        if self.default_event_minutes <= 0 {
            return Err("Default event length must be positive".to_string());
        }
        if self.timezone.trim().is_empty() {
            return Err("Time zone cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn minimum_event_duration(&self) -> Duration {
        Duration::minutes(self.minimum_event_minutes)
    }

    pub fn default_event_duration(&self) -> Duration {
        Duration::minutes(self.default_event_minutes)
    }
}
