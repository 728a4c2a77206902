// Property-based tests for collision grouping, column packing and geometry
// Random days of events, checked against the layout invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::Duration;
use proptest::prelude::*;
use std::collections::HashSet;

use day_layout::models::event::CalendarEvent;
use day_layout::services::geometry::{slot_to_time, time_to_y, y_to_slot};
use day_layout::services::layout::{group_by_collision, pack_columns, DayLayout};

use fixtures::{day_start, event_at_minute, grid, minimum};

/// Up to 25 events with starts anywhere in the day and lengths from
/// zero minutes (or inverted) up to four hours.
fn day_of_events() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec((0i64..1440, -30i64..240), 0..25).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start, minutes))| event_at_minute(&format!("e{:02}", i), start, minutes))
            .collect()
    })
}

fn connected(a: &CalendarEvent, b: &CalendarEvent, events: &[CalendarEvent]) -> bool {
    // breadth-first search over the explicit overlap graph
    let mut seen: HashSet<&str> = HashSet::from([a.id.as_str()]);
    let mut frontier = vec![a];
    while let Some(current) = frontier.pop() {
        if current.id == b.id {
            return true;
        }
        for next in events {
            if next.overlaps(current, minimum()) && seen.insert(next.id.as_str()) {
                frontier.push(next);
            }
        }
    }
    false
}

proptest! {
    /// Property: every event lands in exactly one group
    #[test]
    fn prop_groups_partition_events(events in day_of_events()) {
        let groups = group_by_collision(&events, minimum());
        let mut seen = Vec::new();
        for group in &groups {
            prop_assert!(!group.is_empty());
            seen.extend(group.iter().map(|e| e.id.clone()));
        }
        let mut expected: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
        seen.sort();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }

    /// Property: two events share a group iff a chain of overlaps links them
    #[test]
    fn prop_groups_are_overlap_components(events in day_of_events()) {
        let groups = group_by_collision(&events, minimum());
        let group_of = |id: &str| groups.iter().position(|g| g.iter().any(|e| e.id == id));

        for a in &events {
            for b in &events {
                let same = group_of(&a.id) == group_of(&b.id);
                prop_assert_eq!(same, connected(a, b, &events), "{} / {}", a.id, b.id);
            }
        }
    }

    /// Property: no two events in one column overlap
    #[test]
    fn prop_columns_have_no_overlap(events in day_of_events()) {
        for group in group_by_collision(&events, minimum()) {
            for column in pack_columns(group.events(), minimum()) {
                let members = column.events();
                for (i, a) in members.iter().enumerate() {
                    for b in &members[i + 1..] {
                        prop_assert!(!a.overlaps(b, minimum()), "{} overlaps {}", a.id, b.id);
                    }
                }
            }
        }
    }

    /// Property: column count equals the largest set of events alive at once
    #[test]
    fn prop_column_count_is_minimal(events in day_of_events()) {
        for group in group_by_collision(&events, minimum()) {
            let columns = pack_columns(group.events(), minimum()).len();
            // a maximum clique of intervals always contains some event's start
            let clique = group
                .iter()
                .map(|probe| {
                    group
                        .iter()
                        .filter(|e| e.start <= probe.start && probe.start < e.effective_end(minimum()))
                        .count()
                })
                .max()
                .unwrap_or(0);
            prop_assert_eq!(columns, clique);
        }
    }

    /// Property: a clique of n events needs exactly n columns
    #[test]
    fn prop_clique_gets_one_column_each(n in 1usize..12, offset in 0i64..600) {
        let events: Vec<CalendarEvent> = (0..n)
            .map(|i| event_at_minute(&format!("c{:02}", i), offset + i as i64, 120))
            .collect();
        let refs: Vec<&CalendarEvent> = events.iter().collect();
        prop_assert_eq!(pack_columns(&refs, minimum()).len(), n);
    }

    /// Property: layout does not depend on input order
    #[test]
    fn prop_layout_ignores_input_order(events in day_of_events()) {
        let forward = DayLayout::compute(&events, &grid(), minimum()).records();
        let mut reversed = events.clone();
        reversed.reverse();
        let backward = DayLayout::compute(&reversed, &grid(), minimum()).records();
        prop_assert_eq!(forward, backward);
    }

    /// Property: time -> y -> slot -> time stays within one slot of the original
    #[test]
    fn prop_geometry_round_trip(minute in 0i64..1440, second in 0i64..60) {
        let grid = grid();
        let t = day_start() + Duration::minutes(minute) + Duration::seconds(second);
        let y = time_to_y(t, grid.day_start, grid.pixels_per_hour);
        let back = slot_to_time(y_to_slot(y, grid.slot_height()), grid.day_start, grid.slot_minutes);

        let drift = t - back;
        prop_assert!(drift >= Duration::zero());
        prop_assert!(drift <= Duration::minutes(grid.slot_minutes));
    }
}
