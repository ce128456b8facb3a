//! Server-sent event consumer for in-progress assistant responses.
//!
//! One subscription covers one response: chunks are buffered until the
//! server marks the response complete, a single assistant message is pushed
//! into the transcript, and the subscription is closed. The loop reopens it
//! after a short pause to wait for the next response, or after a longer one
//! when the transport failed. Partial text from a failed subscription is
//! discarded.
//!
//! All EventSource logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use super::error::StreamError;
use super::types::StreamEvent;
use crate::config::SyncConfig;
use crate::state::stream::{StreamBuffer, StreamStep};
#[cfg(feature = "csr")]
use crate::state::transcript::TranscriptState;

/// Pause before the next subscription, based on how the last one ended.
pub fn retry_delay_ms(outcome: &Result<(), StreamError>, config: &SyncConfig) -> u32 {
    match outcome {
        Ok(()) => config.stream_reconnect_ms,
        Err(_) => config.stream_error_retry_ms,
    }
}

/// Decode one event payload and feed it to the buffer.
///
/// # Errors
///
/// Returns the JSON error for payloads that are not a stream event; the
/// buffer is left untouched in that case.
pub fn feed_payload(buffer: &mut StreamBuffer, payload: &str) -> Result<StreamStep, serde_json::Error> {
    let event: StreamEvent = serde_json::from_str(payload)?;
    Ok(buffer.apply(&event))
}

/// Spawn the self-renewing stream loop as a local async task.
#[cfg(feature = "csr")]
pub fn spawn_stream_consumer(config: SyncConfig, transcript: leptos::prelude::RwSignal<TranscriptState>) {
    leptos::task::spawn_local(stream_loop(config, transcript));
}

#[cfg(feature = "csr")]
async fn stream_loop(config: SyncConfig, transcript: leptos::prelude::RwSignal<TranscriptState>) {
    loop {
        let outcome = consume_one_response(&config.stream_path, transcript).await;
        match &outcome {
            Ok(()) => leptos::logging::log!("stream response complete"),
            Err(e) => leptos::logging::warn!("stream error: {e}"),
        }
        let delay_ms = retry_delay_ms(&outcome, &config);
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
    }
}

/// Open a subscription and listen until one response completes.
#[cfg(feature = "csr")]
async fn consume_one_response(
    url: &str,
    transcript: leptos::prelude::RwSignal<TranscriptState>,
) -> Result<(), StreamError> {
    use futures::StreamExt;
    use gloo_net::eventsource::futures::EventSource;
    use leptos::prelude::Update;

    use crate::state::transcript::{Message, Role};

    let mut source = EventSource::new(url).map_err(|e| StreamError::Open(e.to_string()))?;
    let mut events = source
        .subscribe("message")
        .map_err(|e| StreamError::Open(e.to_string()))?;
    let mut buffer = StreamBuffer::default();

    while let Some(item) = events.next().await {
        let (_, event) = match item {
            Ok(pair) => pair,
            Err(e) => {
                if let Some(partial) = buffer.abandon() {
                    leptos::logging::warn!("dropping {} chars of unfinished response", partial.len());
                }
                source.close();
                return Err(StreamError::Transport(format!("{e:?}")));
            }
        };
        let Some(payload) = event.data().as_string() else {
            continue;
        };

        match feed_payload(&mut buffer, &payload) {
            Ok(StreamStep::Finished(text)) => {
                if let Some(text) = text {
                    let time = crate::util::clock::now().to_string();
                    transcript.maybe_update(|t| t.push_streamed(Message::new(Role::Assistant, text, time)));
                }
                source.close();
                return Ok(());
            }
            Ok(StreamStep::Idle | StreamStep::Buffering) => {}
            Err(e) => leptos::logging::warn!("ignoring malformed stream event: {e}"),
        }
    }

    source.close();
    Err(StreamError::Closed)
}
