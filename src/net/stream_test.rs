use super::*;
use crate::state::transcript::{Message, Role, TranscriptState};

/// Drive one subscription's payloads the way the browser loop does.
fn run_payloads(transcript: &mut TranscriptState, payloads: &[&str]) -> Result<(), StreamError> {
    let mut buffer = StreamBuffer::default();
    for payload in payloads {
        if let Ok(StreamStep::Finished(text)) = feed_payload(&mut buffer, payload) {
            if let Some(text) = text {
                transcript.push_streamed(Message::new(Role::Assistant, text, "10:00:00"));
            }
            return Ok(());
        }
    }
    buffer.abandon();
    Err(StreamError::Transport("connection reset".to_owned()))
}

#[test]
fn chunk_sequence_yields_single_assistant_message() {
    let mut transcript = TranscriptState::default();
    let outcome = run_payloads(
        &mut transcript,
        &[r#"{"processing_started": true}"#, r#"{"text": "Hel"}"#, r#"{"text": "lo"}"#, r#"{"complete": true}"#],
    );

    assert_eq!(outcome, Ok(()));
    let messages = transcript.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, Role::Assistant);
    assert_eq!(messages[0].text, "Hello");
}

#[test]
fn error_before_complete_adds_nothing_and_retries_after_five_seconds() {
    let mut transcript = TranscriptState::default();
    let outcome = run_payloads(&mut transcript, &[r#"{"processing_started": true}"#, r#"{"text": "Hel"}"#]);

    assert!(outcome.is_err());
    assert!(transcript.messages().is_empty());
    assert_eq!(retry_delay_ms(&outcome, &SyncConfig::default()), 5000);
}

#[test]
fn completed_response_reconnects_after_one_second() {
    assert_eq!(retry_delay_ms(&Ok(()), &SyncConfig::default()), 1000);
}

#[test]
fn malformed_payload_leaves_buffer_untouched() {
    let mut buffer = StreamBuffer::default();
    feed_payload(&mut buffer, r#"{"text": "Hel"}"#).expect("valid payload");
    assert!(feed_payload(&mut buffer, "not json").is_err());
    let step = feed_payload(&mut buffer, r#"{"text": "lo", "complete": true}"#).expect("valid payload");
    assert_eq!(step, StreamStep::Finished(Some("Hello".to_owned())));
}
