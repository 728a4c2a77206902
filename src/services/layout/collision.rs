//! Partitioning a day's events into collision groups.
//!
//! Two events share a group when they are connected through a chain of
//! overlaps, so this is a connected-components pass over the overlap graph.
//! Because the events are intervals on one line, sorting by start and
//! sweeping with the running maximum effective end finds the components
//! without building the graph.

use chrono::Duration;
use std::cmp::Ordering;

use crate::models::event::CalendarEvent;

/// Maximal set of events transitively linked by overlap.
///
/// Events are ordered by start time, then id.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionGroup<'a> {
    events: Vec<&'a CalendarEvent>,
}

impl<'a> CollisionGroup<'a> {
    pub fn events(&self) -> &[&'a CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CalendarEvent> + '_ {
        self.events.iter().copied()
    }
}

/// Display order used everywhere in layout: start time, then id.
pub(crate) fn by_start_then_id(a: &&CalendarEvent, b: &&CalendarEvent) -> Ordering {
    a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id))
}

/// Group `events` by transitive overlap.
///
/// Empty input gives no groups. Groups come back ordered by their earliest
/// start, so the result does not depend on the input order.
pub fn group_by_collision(events: &[CalendarEvent], minimum: Duration) -> Vec<CollisionGroup<'_>> {
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by(by_start_then_id);

    let mut groups: Vec<CollisionGroup<'_>> = Vec::new();
    let mut current: Vec<&CalendarEvent> = Vec::new();
    let mut reach = None;

    for event in sorted {
        let effective_end = event.effective_end(minimum);
        match reach {
            // every event in `current` starts no later than this one, so it
            // overlaps the group exactly when it starts before the group's reach
            Some(end) if event.start < end => {
                current.push(event);
                reach = Some(end.max(effective_end));
            }
            _ => {
                if !current.is_empty() {
                    groups.push(CollisionGroup {
                        events: std::mem::take(&mut current),
                    });
                }
                current.push(event);
                reach = Some(effective_end);
            }
        }
    }

    if !current.is_empty() {
        groups.push(CollisionGroup { events: current });
    }

    log::debug!(
        "Grouped {} events into {} collision groups",
        events.len(),
        groups.len()
    );
    groups
}
