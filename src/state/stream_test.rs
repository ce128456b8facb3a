use super::*;

fn started() -> StreamEvent {
    StreamEvent { processing_started: Some(true), ..StreamEvent::default() }
}

fn delta(text: &str) -> StreamEvent {
    StreamEvent { text: Some(text.to_owned()), ..StreamEvent::default() }
}

fn complete() -> StreamEvent {
    StreamEvent { complete: Some(true), ..StreamEvent::default() }
}

#[test]
fn buffered_sequence_flushes_once_with_full_text() {
    let mut buffer = StreamBuffer::default();
    assert_eq!(buffer.apply(&started()), StreamStep::Buffering);
    assert_eq!(buffer.apply(&delta("Hel")), StreamStep::Buffering);
    assert_eq!(buffer.apply(&delta("lo")), StreamStep::Buffering);
    assert_eq!(buffer.apply(&complete()), StreamStep::Finished(Some("Hello".to_owned())));
    assert!(!buffer.is_buffering());
}

#[test]
fn repeated_start_does_not_reset_accumulated_text() {
    let mut buffer = StreamBuffer::default();
    buffer.apply(&started());
    buffer.apply(&delta("Hel"));
    assert_eq!(buffer.apply(&started()), StreamStep::Buffering);
    assert!(buffer.is_buffering());
    buffer.apply(&delta("lo"));
    assert_eq!(buffer.apply(&complete()), StreamStep::Finished(Some("Hello".to_owned())));
}

#[test]
fn delta_without_start_begins_a_response() {
    let mut buffer = StreamBuffer::default();
    assert_eq!(buffer.apply(&delta("Hi")), StreamStep::Buffering);
    assert_eq!(buffer.apply(&complete()), StreamStep::Finished(Some("Hi".to_owned())));
}

#[test]
fn complete_event_may_carry_final_delta() {
    let mut buffer = StreamBuffer::default();
    buffer.apply(&started());
    buffer.apply(&delta("Hel"));
    let last = StreamEvent { text: Some("lo".to_owned()), complete: Some(true), processing_started: None };
    assert_eq!(buffer.apply(&last), StreamStep::Finished(Some("Hello".to_owned())));
}

#[test]
fn complete_without_text_finishes_empty() {
    let mut buffer = StreamBuffer::default();
    buffer.apply(&started());
    assert_eq!(buffer.apply(&complete()), StreamStep::Finished(None));
    assert_eq!(buffer.apply(&complete()), StreamStep::Finished(None));
}

#[test]
fn empty_event_while_idle_stays_idle() {
    let mut buffer = StreamBuffer::default();
    assert_eq!(buffer.apply(&StreamEvent::default()), StreamStep::Idle);
}

#[test]
fn abandon_drops_partial_text() {
    let mut buffer = StreamBuffer::default();
    buffer.apply(&started());
    buffer.apply(&delta("Hel"));
    assert_eq!(buffer.abandon().as_deref(), Some("Hel"));
    assert!(!buffer.is_buffering());
    assert_eq!(buffer.apply(&complete()), StreamStep::Finished(None));
}
