//! Merged conversation transcript.
//!
//! DESIGN
//! ======
//! The server reports user, assistant, and system messages as three separate
//! lists and replaces them wholesale on every poll. This module folds those
//! lists, plus messages materialized locally (flushed stream responses and
//! client-side notices), into one chronological sequence.
//!
//! The rendered list only changes when the merge result differs from what is
//! already shown, so repeated identical snapshots never notify the view.
//!
//! ORDERING
//! ========
//! Timestamps are wall-clock `HH:MM:SS` strings compared field by field as
//! numbers. Equal timestamps keep category order: user, assistant, system.
//! Entries whose time cannot be parsed sort after every parseable one.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use std::cmp::Ordering;
use std::fmt;

use crate::net::types::{TimedText, UpdateResponse};

pub const DEFAULT_USER_LABEL: &str = "User";
pub const ASSISTANT_LABEL: &str = "Bunny";
pub const SYSTEM_LABEL: &str = "System";
pub const EMPTY_PLACEHOLDER: &str = "No conversation history yet. Start speaking to begin.";

/// Who produced a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Tie-break rank for messages sharing a timestamp.
    pub fn rank(self) -> u8 {
        match self {
            Role::User => 0,
            Role::Assistant => 1,
            Role::System => 2,
        }
    }

    pub fn item_class(self) -> &'static str {
        match self {
            Role::User => "transcript-item",
            Role::Assistant => "bunny-item",
            Role::System => "system-message",
        }
    }

    pub fn content_class(self) -> &'static str {
        match self {
            Role::Assistant => "response-content",
            Role::User | Role::System => "transcript-content",
        }
    }
}

/// Time of day with one-second resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(Self(hours * 3600 + minutes * 60 + seconds))
    }

    /// Parse `HH:MM:SS`. Each field is one or two ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut fields = raw.trim().split(':');
        let hours = parse_field(fields.next()?)?;
        let minutes = parse_field(fields.next()?)?;
        let seconds = parse_field(fields.next()?)?;
        if fields.next().is_some() {
            return None;
        }
        Self::new(hours, minutes, seconds)
    }

    pub fn seconds_since_midnight(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.0 / 3600, (self.0 / 60) % 60, self.0 % 60)
    }
}

fn parse_field(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.bytes().try_fold(0_u32, |acc, b| Some(acc * 10 + u32::from(b - b'0')))
}

/// A single transcript entry. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub time: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self { role, text: text.into(), time: time.into() }
    }

    fn from_timed(role: Role, item: &TimedText) -> Self {
        Self::new(role, item.text.clone(), item.time.clone())
    }

    pub fn time_of_day(&self) -> Option<TimeOfDay> {
        TimeOfDay::parse(&self.time)
    }
}

/// Chronological order with category tie-break.
pub fn compare_messages(a: &Message, b: &Message) -> Ordering {
    let by_time = match (a.time_of_day(), b.time_of_day()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_time.then_with(|| a.role.rank().cmp(&b.role.rank()))
}

/// Role-partitioned server state from a single poll.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub user: Vec<Message>,
    pub assistant: Vec<Message>,
    pub system: Vec<Message>,
}

impl Snapshot {
    /// Convert a poll response. `history` entries tagged as system messages
    /// are routed to the system list.
    pub fn from_update(update: &UpdateResponse) -> Self {
        let mut snapshot = Self::default();
        for item in &update.history {
            if item.is_system() {
                snapshot.system.push(Message::from_timed(Role::System, item));
            } else {
                snapshot.user.push(Message::from_timed(Role::User, item));
            }
        }
        snapshot
            .assistant
            .extend(update.llm_responses.iter().map(|item| Message::from_timed(Role::Assistant, item)));
        snapshot
            .system
            .extend(update.system_messages.iter().map(|item| Message::from_timed(Role::System, item)));
        snapshot
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.assistant.is_empty() && self.system.is_empty()
    }

    fn has_assistant_text(&self, text: &str) -> bool {
        let text = text.trim();
        self.assistant.iter().any(|m| m.text.trim() == text)
    }
}

/// Concatenate every source in category order, then stable-sort by time.
pub fn merge_messages(snapshot: &Snapshot, streamed: &[Message], local: &[Message]) -> Vec<Message> {
    let mut all = Vec::with_capacity(
        snapshot.user.len() + snapshot.assistant.len() + snapshot.system.len() + streamed.len() + local.len(),
    );
    all.extend(snapshot.user.iter().cloned());
    all.extend(snapshot.assistant.iter().cloned());
    all.extend(streamed.iter().cloned());
    all.extend(snapshot.system.iter().cloned());
    all.extend(local.iter().cloned());
    all.sort_by(compare_messages);
    all
}

/// Transcript state shared through context as `RwSignal<TranscriptState>`.
///
/// Mutators return `true` when the rendered projection changed, which lets
/// callers use `maybe_update` and skip notifying the view otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptState {
    user_label: String,
    snapshot: Snapshot,
    streamed: Vec<Message>,
    local: Vec<Message>,
    rendered: Vec<Message>,
    revision: u64,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self {
            user_label: DEFAULT_USER_LABEL.to_owned(),
            snapshot: Snapshot::default(),
            streamed: Vec::new(),
            local: Vec::new(),
            rendered: Vec::new(),
            revision: 0,
        }
    }
}

impl TranscriptState {
    /// Messages currently shown, in display order.
    pub fn messages(&self) -> &[Message] {
        &self.rendered
    }

    pub fn user_label(&self) -> &str {
        &self.user_label
    }

    /// Bumped every time the rendered projection changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Streamed responses not yet confirmed by a snapshot.
    pub fn pending_streamed(&self) -> &[Message] {
        &self.streamed
    }

    /// Apply one poll response.
    pub fn apply_update(&mut self, update: &UpdateResponse) -> bool {
        let label_changed = self.set_user_label(update.user_id.as_deref().unwrap_or_default());
        let rendered_changed = self.apply_snapshot(Snapshot::from_update(update));
        label_changed || rendered_changed
    }

    /// Replace the server snapshot wholesale.
    ///
    /// Streamed messages the snapshot now contains are dropped; the server
    /// copy is authoritative from here on.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) -> bool {
        self.streamed.retain(|m| !snapshot.has_assistant_text(&m.text));
        self.snapshot = snapshot;
        self.rebuild()
    }

    /// Materialize a fully streamed assistant response.
    pub fn push_streamed(&mut self, message: Message) -> bool {
        let text = message.text.trim();
        if text.is_empty()
            || self.snapshot.has_assistant_text(text)
            || self.streamed.iter().any(|m| m.text.trim() == text)
        {
            return false;
        }
        self.streamed.push(message);
        self.rebuild()
    }

    /// Add a client-side system notice.
    pub fn push_local_system(&mut self, text: impl Into<String>, time: impl Into<String>) -> bool {
        self.local.push(Message::new(Role::System, text, time));
        self.rebuild()
    }

    /// Set the display name used for user messages. Blank input resets to the
    /// default label.
    pub fn set_user_label(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        let next = if trimmed.is_empty() { DEFAULT_USER_LABEL } else { trimmed };
        if self.user_label == next {
            return false;
        }
        next.clone_into(&mut self.user_label);
        self.revision += 1;
        true
    }

    /// Drop everything shown, including local-only messages.
    pub fn clear(&mut self) {
        self.snapshot = Snapshot::default();
        self.streamed.clear();
        self.local.clear();
        self.rendered.clear();
        self.revision += 1;
    }

    /// An empty merge leaves the current view in place; only `clear` empties it.
    fn rebuild(&mut self) -> bool {
        let merged = merge_messages(&self.snapshot, &self.streamed, &self.local);
        if merged.is_empty() || merged == self.rendered {
            return false;
        }
        self.rendered = merged;
        self.revision += 1;
        true
    }
}
