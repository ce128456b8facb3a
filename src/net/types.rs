//! Wire types shared by the poll, stream, and action endpoints.
//!
//! DESIGN
//! ======
//! Every field the server may omit is defaulted so a partially populated
//! payload still decodes. Conversion into transcript messages happens in
//! `state::transcript`, keeping this module a pure schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// One timestamped entry in a snapshot list.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimedText {
    pub text: String,
    pub time: String,
    /// Optional category tag. Entries injected through the server's
    /// system-message route carry `"type": "system"` inside `history`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl TimedText {
    /// Whether this entry was tagged as a system message.
    pub fn is_system(&self) -> bool {
        self.kind.as_deref() == Some("system")
    }
}

/// Full conversation state returned by `GET /update`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpdateResponse {
    pub is_active: bool,
    pub timer_active: bool,
    pub user_id: Option<String>,
    pub current_text: Option<String>,
    pub history: Vec<TimedText>,
    pub llm_responses: Vec<TimedText>,
    pub system_messages: Vec<TimedText>,
}

/// One server-sent event from the response stream.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct StreamEvent {
    pub processing_started: Option<bool>,
    pub text: Option<String>,
    pub complete: Option<bool>,
}

impl StreamEvent {
    pub fn started(&self) -> bool {
        self.processing_started.unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.complete.unwrap_or(false)
    }
}

/// Body returned by every POST action endpoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ActionResponse {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub is_active: Option<bool>,
    pub timer_active: Option<bool>,
}
