//! Columnar layout of one day's events.
//!
//! `collision` splits the day into groups of transitively overlapping events,
//! `columns` packs each group into side-by-side lanes, and [`DayLayout`]
//! combines both with the [`TimeGrid`] to produce absolute positions.
//! Everything is recomputed from scratch on each call.

pub mod collision;
pub mod columns;

use chrono::Duration;
use serde::Serialize;

use crate::models::event::CalendarEvent;
use crate::services::geometry::TimeGrid;

pub use collision::{group_by_collision, CollisionGroup};
pub use columns::{assign_columns, pack_columns, Column, ColumnAssignment};

/// Where one event is drawn on the day grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventPlacement<'a> {
    pub event: &'a CalendarEvent,
    pub column_index: usize,
    pub total_columns: usize,
    pub top: f32,
    pub height: f32,
}

impl EventPlacement<'_> {
    /// Horizontal offset as a fraction of the day column's width.
    pub fn left_fraction(&self) -> f32 {
        self.column_index as f32 / self.total_columns as f32
    }

    pub fn width_fraction(&self) -> f32 {
        1.0 / self.total_columns as f32
    }

    pub fn to_record(&self) -> PlacementRecord {
        PlacementRecord {
            event_id: self.event.id.clone(),
            title: self.event.title.clone(),
            column_index: self.column_index,
            total_columns: self.total_columns,
            top: self.top,
            height: self.height,
            left_fraction: self.left_fraction(),
            width_fraction: self.width_fraction(),
        }
    }
}

/// Owned, serialisable form of an [`EventPlacement`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementRecord {
    pub event_id: String,
    pub title: String,
    pub column_index: usize,
    pub total_columns: usize,
    pub top: f32,
    pub height: f32,
    pub left_fraction: f32,
    pub width_fraction: f32,
}

/// Layout of a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout<'a> {
    pub placements: Vec<EventPlacement<'a>>,
    pub group_count: usize,
}

impl<'a> DayLayout<'a> {
    /// Lay out `events`, which the caller has already limited to this day.
    ///
    /// Placements come group by group, and column by column within a group.
    pub fn compute(events: &'a [CalendarEvent], grid: &TimeGrid, minimum: Duration) -> Self {
        let groups = group_by_collision(events, minimum);
        let placements = groups
            .iter()
            .flat_map(|group| assign_columns(group, minimum))
            .map(|assignment| EventPlacement {
                event: assignment.event,
                column_index: assignment.column_index,
                total_columns: assignment.total_columns,
                top: grid.event_top(assignment.event),
                height: grid.event_height(assignment.event),
            })
            .collect();

        Self {
            placements,
            group_count: groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn placement_for(&self, event_id: &str) -> Option<&EventPlacement<'a>> {
        self.placements.iter().find(|p| p.event.id == event_id)
    }

    pub fn records(&self) -> Vec<PlacementRecord> {
        self.placements.iter().map(EventPlacement::to_record).collect()
    }
}

/// Events whose effective interval intersects the grid's day.
pub fn filter_to_day(events: &[CalendarEvent], grid: &TimeGrid, minimum: Duration) -> Vec<CalendarEvent> {
    let day_end = grid.day_end();
    events
        .iter()
        .filter(|e| e.start < day_end && e.effective_end(minimum) > grid.day_start)
        .cloned()
        .collect()
}
