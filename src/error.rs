use thiserror::Error;

/// Why a backend event record could not be turned into a [`CalendarEvent`].
///
/// [`CalendarEvent`]: crate::models::event::CalendarEvent
#[derive(Error, Debug)]
pub enum EventParseError {
    #[error("event {id}: missing {field}")]
    MissingTimestamp { id: String, field: &'static str },

    #[error("event {id}: invalid {field} {value:?}: {source}")]
    InvalidTimestamp {
        id: String,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("event {id}: {field} must be an ISO 8601 string, got {value}")]
    TimestampNotString {
        id: String,
        field: &'static str,
        value: serde_json::Value,
    },

    #[error("event {id}: malformed record: {source}")]
    Malformed {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons the drop controller refuses a gesture.
///
/// All of these are recoverable. The embedding UI decides how to surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    #[error("no drag gesture is active")]
    NotDragging,

    #[error("no target calendar account is configured")]
    NoTargetCalendar,

    #[error("event {0} cannot be modified")]
    EventNotModifiable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}
