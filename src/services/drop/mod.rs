// Drop controller
//
// Tracks one drag gesture over a day's time grid.
// - Idle: nothing is being dragged, no preview
// - Hovering: a payload is over the grid; the preview follows the pointer
// A drop or cancel always returns the controller to Idle.

pub mod sink;

use chrono::{DateTime, Duration, FixedOffset};

use crate::error::DropError;
use crate::models::drop_item::DragPayload;
use crate::models::event::CalendarEvent;
use crate::models::intent::{DropIntent, EventLink};
use crate::models::settings::LayoutSettings;
use crate::services::geometry::TimeGrid;

pub use sink::{DropSink, RecordingSink};

/// What the grid shows while a payload hovers over it.
#[derive(Clone, Debug, PartialEq)]
pub enum DragPreview {
    /// Highlight of a bare slot; used when there is no event to draw yet
    EmptySlot(i64),
    /// The dragged event at its candidate time
    Ghost(CalendarEvent),
}

impl DragPreview {
    pub fn ghost(&self) -> Option<&CalendarEvent> {
        match self {
            DragPreview::Ghost(event) => Some(event),
            DragPreview::EmptySlot(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Hovering,
}

#[derive(Clone, Debug)]
struct HoverState {
    payload: DragPayload,
    slot: i64,
    preview: DragPreview,
}

/// Drag-and-drop session for one day's rendering surface.
///
/// Only one gesture is tracked at a time. The embedding UI owns the
/// controller and feeds it pointer offsets measured from the top of the grid.
#[derive(Clone, Debug)]
pub struct DropController {
    grid: TimeGrid,
    target_account: Option<String>,
    minimum_duration: Duration,
    default_duration: Duration,
    hover: Option<HoverState>,
}

impl DropController {
    pub fn new(grid: TimeGrid, settings: &LayoutSettings, target_account: Option<String>) -> Self {
        Self {
            grid,
            target_account,
            minimum_duration: settings.minimum_event_duration(),
            default_duration: settings.default_event_duration(),
            hover: None,
        }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Account that newly created events are written to.
    pub fn set_target_account(&mut self, account_id: Option<String>) {
        self.target_account = account_id;
    }

    pub fn phase(&self) -> DragPhase {
        if self.hover.is_some() {
            DragPhase::Hovering
        } else {
            DragPhase::Idle
        }
    }

    pub fn preview(&self) -> Option<&DragPreview> {
        self.hover.as_ref().map(|h| &h.preview)
    }

    pub fn current_slot(&self) -> Option<i64> {
        self.hover.as_ref().map(|h| h.slot)
    }

    /// Start tracking `payload` at `pointer_y`.
    ///
    /// Entering while a gesture is already active replaces it.
    pub fn drag_enter(
        &mut self,
        payload: DragPayload,
        pointer_y: f32,
    ) -> Result<&DragPreview, DropError> {
        if let Some(event) = payload.event().filter(|e| !e.can_modify) {
            self.hover = None;
            log::info!("Refusing to drag read-only event {}", event.id);
            return Err(DropError::EventNotModifiable(event.id.clone()));
        }

        let slot = self.slot_for(&payload, pointer_y);
        let preview = self.preview_for(&payload, slot);
        log::debug!("Drag enter: {} at slot {}", payload.kind_name(), slot);

        let state = self.hover.insert(HoverState {
            payload,
            slot,
            preview,
        });
        Ok(&state.preview)
    }

    /// Follow the pointer while hovering.
    pub fn drag_over(&mut self, pointer_y: f32) -> Result<&DragPreview, DropError> {
        let Some(state) = self.hover.as_ref() else {
            return Err(DropError::NotDragging);
        };

        let slot = self.slot_for(&state.payload, pointer_y);
        if slot != state.slot {
            let preview = self.preview_for(&state.payload, slot);
            if let Some(state) = self.hover.as_mut() {
                state.slot = slot;
                state.preview = preview;
            }
        }

        self.hover
            .as_ref()
            .map(|h| &h.preview)
            .ok_or(DropError::NotDragging)
    }

    /// Pointer left the surface; the gesture is abandoned.
    pub fn drag_leave(&mut self) {
        self.cancel();
    }

    /// Escape, or release outside any target. No mutation is requested.
    pub fn cancel(&mut self) {
        if self.hover.take().is_some() {
            log::debug!("Drag cancelled");
        }
    }

    /// Finish the gesture at `pointer_y`.
    ///
    /// On success the intent is handed to `sink` and also returned. A drop
    /// with no target account is rejected through `sink` and nothing is
    /// submitted. Either way the controller is idle afterwards.
    pub fn drop_at(
        &mut self,
        pointer_y: f32,
        sink: &mut dyn DropSink,
    ) -> Result<DropIntent, DropError> {
        let state = self.hover.take().ok_or(DropError::NotDragging)?;

        let Some(account_id) = self.target_account.clone() else {
            let err = DropError::NoTargetCalendar;
            log::info!("Rejected {} drop: {}", state.payload.kind_name(), err);
            sink.reject(&err);
            return Err(err);
        };

        let slot = self.slot_for(&state.payload, pointer_y);
        let drop_time = self.grid.slot_to_time(slot);

        let intent = match state.payload {
            DragPayload::Task(task) => DropIntent::Create {
                account_id,
                start: drop_time,
                end: drop_time + self.default_duration,
                title: task.title,
                description: task.body,
                link: EventLink::Task(task.id),
            },
            DragPayload::ViewHeader(view) => DropIntent::Create {
                account_id,
                start: drop_time,
                end: drop_time + self.default_duration,
                title: view.name,
                description: String::new(),
                link: EventLink::View(view.id),
            },
            DragPayload::MoveEvent { event, .. } => DropIntent::Move {
                end: drop_time + event.duration(),
                start: drop_time,
                account_id: event.account_id.unwrap_or(account_id),
                event_id: event.id,
            },
            DragPayload::ResizeEvent { event } => DropIntent::Resize {
                end: self.resized_end(&event, drop_time),
                account_id: event.account_id.unwrap_or(account_id),
                event_id: event.id,
            },
        };

        log::debug!("Dropped at slot {}: {:?}", slot, intent);
        sink.submit(intent.clone());
        Ok(intent)
    }

    fn slot_for(&self, payload: &DragPayload, pointer_y: f32) -> i64 {
        let offset = pointer_y - payload.grab_offset();
        match payload {
            // a resize targets the event's end edge, which may sit on midnight
            DragPayload::ResizeEvent { .. } => self.grid.nearest_boundary(offset),
            _ if payload.snaps_to_nearest() => self.grid.nearest_slot(offset),
            _ => self.grid.clamped_slot(offset),
        }
    }

    fn preview_for(&self, payload: &DragPayload, slot: i64) -> DragPreview {
        let time = self.grid.slot_to_time(slot);
        match payload {
            DragPayload::Task(_) | DragPayload::ViewHeader(_) => DragPreview::EmptySlot(slot),
            DragPayload::MoveEvent { event, .. } => DragPreview::Ghost(event.moved_to(time)),
            DragPayload::ResizeEvent { event } => {
                DragPreview::Ghost(event.with_end(self.resized_end(event, time)))
            }
        }
    }

    /// End time for a resize; never at or before the start.
    fn resized_end(
        &self,
        event: &CalendarEvent,
        candidate: DateTime<FixedOffset>,
    ) -> DateTime<FixedOffset> {
        if candidate > event.start {
            candidate
        } else {
            event.start + self.minimum_duration
        }
    }
}
