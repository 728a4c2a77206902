// Drop sink
// Outbound side of the drop controller: mutation requests and rejections

use crate::error::DropError;
use crate::models::intent::DropIntent;

/// Receives the outcome of a dropped gesture.
///
/// The embedding application implements this to forward intents to its
/// persistence layer and to tell the user about rejected drops.
pub trait DropSink {
    fn submit(&mut self, intent: DropIntent);

    fn reject(&mut self, reason: &DropError);
}

/// Sink that keeps everything it is handed, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub intents: Vec<DropIntent>,
    pub rejections: Vec<DropError>,
}

impl DropSink for RecordingSink {
    fn submit(&mut self, intent: DropIntent) {
        self.intents.push(intent);
    }

    fn reject(&mut self, reason: &DropError) {
        self.rejections.push(reason.clone());
    }
}
