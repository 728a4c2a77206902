// Intent module
// Mutation requests emitted when a drag gesture is dropped

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// What a newly created event is linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLink {
    Task(String),
    View(String),
}

/// A single mutation request for the persistence layer.
///
/// Each intent is idempotent; deduplication and optimistic cache updates are
/// the receiver's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropIntent {
    Create {
        account_id: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        title: String,
        /// Task body as written, usually markdown. Rendering it for the
        /// calendar backend is up to the sink.
        description: String,
        link: EventLink,
    },
    Move {
        event_id: String,
        account_id: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
    Resize {
        event_id: String,
        account_id: String,
        end: DateTime<FixedOffset>,
    },
}

impl DropIntent {
    /// Id of the event this intent edits; `None` for creation.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            DropIntent::Create { .. } => None,
            DropIntent::Move { event_id, .. } | DropIntent::Resize { event_id, .. } => {
                Some(event_id)
            }
        }
    }

    pub fn task_id(&self) -> Option<&str> {
        match self {
            DropIntent::Create {
                link: EventLink::Task(id),
                ..
            } => Some(id),
            _ => None,
        }
    }
}
