// Parameterized tests for time grid geometry
// Covers the pure mapping functions at several grid scales

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::Duration;
use test_case::test_case;

use day_layout::models::settings::LayoutSettings;
use day_layout::services::geometry::{body_height, slot_to_time, time_to_y, y_to_slot, TimeGrid};

use fixtures::{at, day_start};

#[test_case(0, 0, 0.0; "midnight")]
#[test_case(9, 0, 1080.0; "nine am")]
#[test_case(9, 15, 1110.0; "quarter past nine")]
#[test_case(23, 30, 2820.0; "half past eleven pm")]
#[test_case(-1, 0, 0.0; "before the day clamps to top")]
#[test_case(25, 0, 2880.0; "after the day clamps to bottom")]
fn test_time_to_y(hour: i64, minute: i64, expected: f32) {
    assert_eq!(time_to_y(at(hour, minute), day_start(), 120.0), expected);
}

#[test_case(0.0, 30.0, 0; "top of grid")]
#[test_case(59.9, 30.0, 1; "inside second slot")]
#[test_case(1200.0, 30.0, 40; "slot boundary")]
#[test_case(1200.0, 16.0, 75; "sixteen pixel slots")]
fn test_y_to_slot(offset: f32, slot_height: f32, expected: i64) {
    assert_eq!(y_to_slot(offset, slot_height), expected);
}

#[test_case(40, 15, 10, 0; "slot forty at fifteen minutes")]
#[test_case(3, 30, 1, 30; "thirty minute slots")]
#[test_case(95, 15, 23, 45; "last slot of the day")]
fn test_slot_to_time(slot: i64, slot_minutes: i64, hour: i64, minute: i64) {
    assert_eq!(slot_to_time(slot, day_start(), slot_minutes), at(hour, minute));
}

#[test_case(60, 120.0; "one hour")]
#[test_case(15, 30.0; "exactly the minimum")]
#[test_case(5, 30.0; "short event is raised")]
#[test_case(0, 30.0; "zero length")]
fn test_body_height(minutes: i64, expected: f32) {
    assert_eq!(body_height(Duration::minutes(minutes), 120.0, 30.0), expected);
}

#[test_case(15, 120.0, 30.0, 96; "default grid")]
#[test_case(30, 64.0, 32.0, 48; "half hour slots")]
#[test_case(5, 60.0, 5.0, 288; "five minute slots")]
fn test_grid_scales(slot_minutes: i64, pixels_per_hour: f32, slot_height: f32, slots: i64) {
    let settings = LayoutSettings {
        slot_minutes,
        pixels_per_hour,
        ..Default::default()
    };
    let grid = TimeGrid::new(day_start(), &settings);
    assert_eq!(grid.slot_height(), slot_height);
    assert_eq!(grid.slots_per_day(), slots);
}

#[test]
fn test_round_trip_loses_only_sub_slot_precision() {
    let grid = TimeGrid::new(day_start(), &LayoutSettings::default());
    let t = at(14, 52);
    let slot = grid.y_to_slot(grid.time_to_y(t));
    assert_eq!(grid.slot_to_time(slot), at(14, 45));
}
