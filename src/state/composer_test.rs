use super::*;

#[test]
fn input_height_is_clamped() {
    assert_eq!(clamp_input_height(10.0), MIN_INPUT_HEIGHT_PX);
    assert_eq!(clamp_input_height(64.0), 64.0);
    assert_eq!(clamp_input_height(400.0), MAX_INPUT_HEIGHT_PX);
}

#[test]
fn conversation_height_shrinks_as_input_grows() {
    let mut state = ComposerState::default();
    assert_eq!(state.conversation_height_css(), "calc(99.5vh - 250px)");

    assert!(state.set_input_height(100.0));
    assert_eq!(state.conversation_height_css(), "calc(99.5vh - 310px)");

    assert!(!state.set_input_height(100.0));
}

#[test]
fn outgoing_trims_and_rejects_blank_drafts() {
    let mut state = ComposerState::default();
    assert!(state.outgoing().is_none());

    state.draft = "   \n".to_owned();
    assert!(state.outgoing().is_none());

    state.draft = "  hi there \n".to_owned();
    assert_eq!(state.outgoing().as_deref(), Some("hi there"));
}

#[test]
fn reset_draft_restores_minimum_height() {
    let mut state = ComposerState { draft: "text".to_owned(), input_height_px: 90.0, ..ComposerState::default() };
    state.reset_draft();
    assert!(state.draft.is_empty());
    assert_eq!(state.input_height_px, MIN_INPUT_HEIGHT_PX);
}
