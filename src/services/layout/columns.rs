//! Packing a collision group into side-by-side columns.
//!
//! Events are placed greedily into the first column where they overlap
//! nothing. Processing in start order (ties broken by id) keeps the column
//! count equal to the largest set of mutually overlapping events, and keeps
//! assignments stable across re-renders of the same event set.

use chrono::Duration;

use super::collision::{by_start_then_id, CollisionGroup};
use crate::models::event::CalendarEvent;

/// Vertical lane of pairwise non-overlapping events.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    events: Vec<&'a CalendarEvent>,
}

impl<'a> Column<'a> {
    pub fn events(&self) -> &[&'a CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn accepts(&self, event: &CalendarEvent, minimum: Duration) -> bool {
        self.events.iter().all(|e| !e.overlaps(event, minimum))
    }
}

/// An event with the horizontal slot it was packed into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnAssignment<'a> {
    pub event: &'a CalendarEvent,
    pub column_index: usize,
    pub total_columns: usize,
}

/// Pack a group's events into the fewest columns the greedy pass finds.
pub fn pack_columns<'a>(events: &[&'a CalendarEvent], minimum: Duration) -> Vec<Column<'a>> {
    let mut sorted = events.to_vec();
    sorted.sort_by(by_start_then_id);
    first_fit(sorted, minimum)
}

fn first_fit<'a>(
    events: impl IntoIterator<Item = &'a CalendarEvent>,
    minimum: Duration,
) -> Vec<Column<'a>> {
    let mut columns: Vec<Column<'a>> = Vec::new();
    for event in events {
        match columns.iter_mut().find(|c| c.accepts(event, minimum)) {
            Some(column) => column.events.push(event),
            None => columns.push(Column {
                events: vec![event],
            }),
        }
    }
    columns
}

/// Column assignments for every event of `group`, column by column.
pub fn assign_columns<'a>(group: &CollisionGroup<'a>, minimum: Duration) -> Vec<ColumnAssignment<'a>> {
    let columns = pack_columns(group.events(), minimum);
    let total_columns = columns.len();

    columns
        .iter()
        .enumerate()
        .flat_map(|(column_index, column)| {
            column.events.iter().map(move |&event| ColumnAssignment {
                event,
                column_index,
                total_columns,
            })
        })
        .collect()
}
