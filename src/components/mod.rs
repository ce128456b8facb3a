//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the transcript and its controls while reading/writing
//! shared state from the Leptos context providers installed by `App`.

pub mod controls;
pub mod message_input;
pub mod scroll_button;
pub mod status_bar;
pub mod transcript;
