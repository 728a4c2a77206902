// Day Layout
// Prints the column layout of one day's events as JSON

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;

use day_layout::models::event::parse_event_list;
use day_layout::services::geometry::TimeGrid;
use day_layout::services::layout::{filter_to_day, DayLayout};
use day_layout::services::settings::SettingsService;
use day_layout::utils::date::day_start_in;

const USAGE: &str = "usage: day-layout <events.json> <YYYY-MM-DD> [settings.toml]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(events_path), Some(date)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let settings_service = match args.next() {
        Some(path) => SettingsService::new(PathBuf::from(path)),
        None => SettingsService::for_user()?,
    };

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .with_context(|| format!("invalid date {:?}; {}", date, USAGE))?;

    log::debug!("Layout settings file: {}", settings_service.path().display());
    let settings = settings_service.load()?;
    let tz = SettingsService::time_zone(&settings)?;
    let day_start = day_start_in(date, &tz)
        .ok_or_else(|| anyhow!("{} has no start in {}", date, settings.timezone))?;
    let grid = TimeGrid::new(day_start, &settings);

    let data = fs::read_to_string(&events_path)
        .with_context(|| format!("failed to read events from {}", events_path))?;
    let events = parse_event_list(&data)
        .with_context(|| format!("{} is not a JSON array of events", events_path))?;
    let day_events = filter_to_day(&events, &grid, settings.minimum_event_duration());
    log::info!(
        "Laying out {} of {} events for {}",
        day_events.len(),
        events.len(),
        date
    );

    let layout = DayLayout::compute(&day_events, &grid, settings.minimum_event_duration());
    println!("{}", serde_json::to_string_pretty(&layout.records())?);
    Ok(())
}
