// Event module
// Calendar event record as delivered by the backend, plus layout helpers

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EventParseError;

/// Calendar event as consumed by the layout engine.
///
/// `start` may be after `end` when upstream data is inconsistent. Such events
/// are kept and treated as zero-length; see [`CalendarEvent::effective_end`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub account_id: Option<String>,
    pub title: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub can_modify: bool,
    /// Backend fields the layout never looks at.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Event record exactly as the REST API returns it.
///
/// Timestamps are kept as raw JSON values and checked during conversion, so
/// a record with a bad timestamp of any type is rejected on its own. Lists
/// should go through [`parse_event_list`], which also converts records one
/// at a time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    pub id: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub datetime_start: Option<Value>,
    #[serde(default)]
    pub datetime_end: Option<Value>,
    #[serde(default = "default_can_modify")]
    pub can_modify: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_can_modify() -> bool {
    true
}

impl CalendarEvent {
    /// Create an event with the fields layout needs.
    ///
    /// # Examples
    /// ```
    /// use day_layout::models::event::CalendarEvent;
    /// use chrono::DateTime;
    ///
    /// let start = DateTime::parse_from_rfc3339("2024-03-01T09:00:00-05:00").unwrap();
    /// let end = DateTime::parse_from_rfc3339("2024-03-01T09:30:00-05:00").unwrap();
    /// let event = CalendarEvent::new("evt-1", "Standup", start, end);
    /// assert_eq!(event.duration().num_minutes(), 30);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: None,
            title: title.into(),
            start,
            end,
            can_modify: true,
            extra: Map::new(),
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Raw duration, negative for inverted intervals.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// End time used for overlap tests.
    ///
    /// Events shorter than `minimum` (including zero-length and inverted ones)
    /// are stretched to `start + minimum`. The event itself is not changed.
    pub fn effective_end(&self, minimum: Duration) -> DateTime<FixedOffset> {
        if self.duration() < minimum {
            self.start + minimum
        } else {
            self.end
        }
    }

    /// Half-open intersection of the two effective intervals.
    pub fn overlaps(&self, other: &CalendarEvent, minimum: Duration) -> bool {
        self.start < other.effective_end(minimum) && self.effective_end(minimum) > other.start
    }

    /// Copy of this event shifted to `start`, keeping its duration.
    pub fn moved_to(&self, start: DateTime<FixedOffset>) -> Self {
        let mut moved = self.clone();
        moved.end = start + self.duration();
        moved.start = start;
        moved
    }

    /// Copy of this event with only the end replaced.
    pub fn with_end(&self, end: DateTime<FixedOffset>) -> Self {
        let mut resized = self.clone();
        resized.end = end;
        resized
    }
}

impl TryFrom<RawEvent> for CalendarEvent {
    type Error = EventParseError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let start = parse_timestamp(&raw.id, "datetime_start", raw.datetime_start)?;
        let end = parse_timestamp(&raw.id, "datetime_end", raw.datetime_end)?;

        Ok(Self {
            id: raw.id,
            account_id: raw.account_id,
            title: raw.title,
            start,
            end,
            can_modify: raw.can_modify,
            extra: raw.extra,
        })
    }
}

fn parse_timestamp(
    id: &str,
    field: &'static str,
    value: Option<Value>,
) -> Result<DateTime<FixedOffset>, EventParseError> {
    let missing = || EventParseError::MissingTimestamp {
        id: id.to_string(),
        field,
    };
    let value = match value {
        None | Some(Value::Null) => return Err(missing()),
        Some(Value::String(value)) if value.trim().is_empty() => return Err(missing()),
        Some(Value::String(value)) => value,
        Some(other) => {
            return Err(EventParseError::TimestampNotString {
                id: id.to_string(),
                field,
                value: other,
            })
        }
    };

    DateTime::parse_from_rfc3339(value.trim()).map_err(|source| {
        EventParseError::InvalidTimestamp {
            id: id.to_string(),
            field,
            value: value.clone(),
            source,
        }
    })
}

impl TryFrom<Value> for CalendarEvent {
    type Error = EventParseError;

    fn try_from(record: Value) -> Result<Self, Self::Error> {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>")
            .to_string();
        let raw: RawEvent = serde_json::from_value(record)
            .map_err(|source| EventParseError::Malformed { id, source })?;
        CalendarEvent::try_from(raw)
    }
}

/// Convert backend records, dropping the ones that cannot be used.
pub fn parse_events<R>(records: impl IntoIterator<Item = R>) -> Vec<CalendarEvent>
where
    R: TryInto<CalendarEvent, Error = EventParseError>,
{
    records
        .into_iter()
        .filter_map(|record| match record.try_into() {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping event in layout: {}", err);
                None
            }
        })
        .collect()
}

/// Parse a JSON array of backend records.
///
/// Only a document that is not an array fails as a whole. Each element is
/// converted on its own and bad ones are logged and skipped.
pub fn parse_event_list(json: &str) -> Result<Vec<CalendarEvent>, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    Ok(parse_events(records))
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    account_id: Option<String>,
    title: String,
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
    can_modify: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            account_id: None,
            title: String::new(),
            start: None,
            end: None,
            can_modify: true,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn start(mut self, start: DateTime<FixedOffset>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<FixedOffset>) -> Self {
        self.end = Some(end);
        self
    }

    /// Mark the event read-only (e.g. an invite the user does not own)
    pub fn read_only(mut self) -> Self {
        self.can_modify = false;
        self
    }

    /// Build the event. Inverted intervals are accepted.
    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        if id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        Ok(CalendarEvent {
            id,
            account_id: self.account_id,
            title: self.title,
            start,
            end,
            can_modify: self.can_modify,
            extra: Map::new(),
        })
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
