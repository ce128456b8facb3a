//! Accumulator for one streamed assistant response.
//!
//! Chunks are buffered silently and only surface as a complete text once the
//! server signals `complete`. Nothing partial ever reaches the transcript.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use crate::net::types::StreamEvent;

/// Result of feeding one event into the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamStep {
    /// No response is in progress.
    Idle,
    /// A response is in progress; keep listening.
    Buffering,
    /// The response finished. `None` when it carried no visible text.
    Finished(Option<String>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamBuffer {
    in_progress: Option<String>,
}

impl StreamBuffer {
    /// Feed one event. A text delta without a preceding `processing_started`
    /// implicitly starts a response.
    pub fn apply(&mut self, event: &StreamEvent) -> StreamStep {
        if event.started() && self.in_progress.is_none() {
            self.in_progress = Some(String::new());
        }

        if let Some(delta) = event.text.as_deref().filter(|d| !d.is_empty()) {
            self.in_progress.get_or_insert_with(String::new).push_str(delta);
        }

        if event.is_complete() {
            let text = self.in_progress.take().filter(|t| !t.trim().is_empty());
            return StreamStep::Finished(text);
        }

        if self.in_progress.is_some() { StreamStep::Buffering } else { StreamStep::Idle }
    }

    /// Discard any partial response, returning it for logging.
    pub fn abandon(&mut self) -> Option<String> {
        self.in_progress.take()
    }

    pub fn is_buffering(&self) -> bool {
        self.in_progress.is_some()
    }
}
