use super::*;

// =============================================================
// UpdateResponse
// =============================================================

#[test]
fn update_response_decodes_full_payload() {
    let raw = r#"{
        "current_text": "",
        "is_active": true,
        "timer_active": false,
        "user_id": "lumi",
        "history": [{"text": "hi", "time": "10:00:01"}],
        "llm_responses": [{"text": "hello", "time": "10:00:00"}],
        "system_messages": []
    }"#;
    let update: UpdateResponse = serde_json::from_str(raw).expect("payload should decode");
    assert!(update.is_active);
    assert!(!update.timer_active);
    assert_eq!(update.user_id.as_deref(), Some("lumi"));
    assert_eq!(update.history.len(), 1);
    assert_eq!(update.history[0].text, "hi");
    assert_eq!(update.llm_responses[0].time, "10:00:00");
    assert!(update.system_messages.is_empty());
}

#[test]
fn update_response_defaults_missing_fields() {
    let update: UpdateResponse = serde_json::from_str(r#"{"history": []}"#).expect("payload should decode");
    assert!(!update.is_active);
    assert!(update.user_id.is_none());
    assert!(update.llm_responses.is_empty());
}

#[test]
fn update_response_accepts_null_user_id() {
    let update: UpdateResponse = serde_json::from_str(r#"{"user_id": null}"#).expect("payload should decode");
    assert!(update.user_id.is_none());
}

#[test]
fn timed_text_reads_system_type_tag() {
    let item: TimedText =
        serde_json::from_str(r#"{"type": "system", "text": "note", "time": "08:00:00"}"#).expect("item should decode");
    assert!(item.is_system());

    let plain: TimedText = serde_json::from_str(r#"{"text": "hi", "time": "08:00:00"}"#).expect("item should decode");
    assert!(!plain.is_system());
}

// =============================================================
// StreamEvent
// =============================================================

#[test]
fn stream_event_flags_default_to_false() {
    let event: StreamEvent = serde_json::from_str(r#"{"text": "Hel"}"#).expect("event should decode");
    assert!(!event.started());
    assert!(!event.is_complete());
    assert_eq!(event.text.as_deref(), Some("Hel"));
}

#[test]
fn stream_event_reads_start_and_complete() {
    let start: StreamEvent = serde_json::from_str(r#"{"processing_started": true}"#).expect("event should decode");
    let done: StreamEvent = serde_json::from_str(r#"{"complete": true}"#).expect("event should decode");
    assert!(start.started());
    assert!(done.is_complete());
}

// =============================================================
// ActionResponse
// =============================================================

#[test]
fn action_response_reads_action_specific_fields() {
    let raw = r#"{"success": false, "message": "Transcription already active", "is_active": true}"#;
    let resp: ActionResponse = serde_json::from_str(raw).expect("response should decode");
    assert!(!resp.success);
    assert_eq!(resp.message.as_deref(), Some("Transcription already active"));
    assert_eq!(resp.is_active, Some(true));
    assert!(resp.timer_active.is_none());
}
