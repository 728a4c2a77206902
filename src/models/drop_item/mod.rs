// Drop item module
// What is being dragged onto the calendar surface

use crate::models::event::CalendarEvent;

/// Task being scheduled by dropping it on the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRef {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Saved overview view whose header was dragged onto the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRef {
    pub id: String,
    pub name: String,
}

/// Payload of a drag gesture over one day's surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// New task to schedule; no event exists yet
    Task(TaskRef),
    /// View header to block time for
    ViewHeader(ViewRef),
    /// Existing event being moved.
    ///
    /// `grab_offset` is the distance in pixels from the event's top edge to
    /// the pointer when the gesture started.
    MoveEvent {
        event: CalendarEvent,
        grab_offset: f32,
    },
    /// Bottom edge of an existing event being dragged
    ResizeEvent { event: CalendarEvent },
}

impl DragPayload {
    /// Event being edited, if this gesture edits one.
    pub fn event(&self) -> Option<&CalendarEvent> {
        match self {
            DragPayload::MoveEvent { event, .. } | DragPayload::ResizeEvent { event } => Some(event),
            DragPayload::Task(_) | DragPayload::ViewHeader(_) => None,
        }
    }

    /// Move and resize snap to the nearest slot boundary rather than the slot
    /// under the pointer.
    pub fn snaps_to_nearest(&self) -> bool {
        matches!(
            self,
            DragPayload::MoveEvent { .. } | DragPayload::ResizeEvent { .. }
        )
    }

    pub fn grab_offset(&self) -> f32 {
        match self {
            DragPayload::MoveEvent { grab_offset, .. } => *grab_offset,
            _ => 0.0,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DragPayload::Task(_) => "task",
            DragPayload::ViewHeader(_) => "view_header",
            DragPayload::MoveEvent { .. } => "move",
            DragPayload::ResizeEvent { .. } => "resize",
        }
    }
}
