//! Resolve user actions into UI state changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buttons and forms call `dispatch`, which POSTs the action and applies the
//! resolved outcome. The decision of what an outcome does is kept pure in
//! `resolve_outcome` so it can be tested without a browser.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

#[cfg(feature = "csr")]
use leptos::prelude::Update;
use leptos::prelude::{RwSignal, expect_context};

use crate::net::api::Action;
use crate::net::error::ApiError;
use crate::net::poller::PollController;
use crate::net::types::ActionResponse;
#[cfg(feature = "csr")]
use crate::state::activity::Indicator;
use crate::state::activity::ActivityState;
use crate::state::composer::ComposerState;
use crate::state::transcript::TranscriptState;

pub const SESSION_ENDED_ALERT: &str = "Chat session ended.";
pub const SESSION_ENDED_NOTICE: &str = "Chat session ended. All services have been stopped.";
pub const USER_ID_FAILED_ALERT: &str = "Error updating user ID. Please try again.";

/// Build the user-id update for a form submission. Blank drafts are sent as
/// an empty id so the server decides whether to accept them.
pub fn set_user_id_action(draft: &str) -> Action {
    Action::SetUserId(draft.trim().to_owned())
}

/// State changes implied by one completed action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub alert: Option<String>,
    pub mic_active: Option<bool>,
    pub timer_active: Option<bool>,
    pub user_label: Option<String>,
    pub clear_transcript: bool,
    pub clear_draft: bool,
    /// Post the local "session ended" notice and disable the controls.
    pub end_session: bool,
    pub stop_polling: bool,
}

/// Map an action result to its outcome.
///
/// Rejections raise an alert and change nothing else, except that ending
/// the chat posts the session notice for any server reply. Transport
/// failures are silent, except for user-id updates, which the user is told
/// to retry.
pub fn resolve_outcome(action: &Action, result: &Result<ActionResponse, ApiError>) -> ActionOutcome {
    let resp = match result {
        Ok(resp) => resp,
        Err(ApiError::Rejected(reason)) => {
            return ActionOutcome {
                alert: Some(reason.clone()),
                end_session: matches!(action, Action::EndChat),
                ..ActionOutcome::default()
            };
        }
        Err(_) if matches!(action, Action::SetUserId(_)) => {
            return ActionOutcome { alert: Some(USER_ID_FAILED_ALERT.to_owned()), ..ActionOutcome::default() };
        }
        Err(_) => return ActionOutcome::default(),
    };

    match action {
        Action::StartMic | Action::StopMic => ActionOutcome { mic_active: resp.is_active, ..ActionOutcome::default() },
        Action::StartTimer | Action::StopTimer => {
            ActionOutcome { timer_active: resp.timer_active, ..ActionOutcome::default() }
        }
        Action::Clear => ActionOutcome { clear_transcript: true, ..ActionOutcome::default() },
        Action::EndChat => ActionOutcome {
            alert: Some(SESSION_ENDED_ALERT.to_owned()),
            end_session: true,
            stop_polling: true,
            ..ActionOutcome::default()
        },
        Action::SetUserId(user_id) => ActionOutcome {
            alert: resp.message.clone(),
            user_label: Some(user_id.clone()),
            ..ActionOutcome::default()
        },
        Action::SendMessage(_) => ActionOutcome { clear_draft: true, ..ActionOutcome::default() },
    }
}

/// Signals an action outcome may touch.
#[derive(Clone)]
pub struct ActionTargets {
    pub transcript: RwSignal<TranscriptState>,
    pub activity: RwSignal<ActivityState>,
    pub composer: RwSignal<ComposerState>,
    pub poller: PollController,
}

impl ActionTargets {
    /// Collect the targets provided by `App`.
    pub fn from_context() -> Self {
        Self {
            transcript: expect_context(),
            activity: expect_context(),
            composer: expect_context(),
            poller: expect_context(),
        }
    }
}

/// POST an action in the background and apply its outcome.
#[cfg(feature = "csr")]
pub fn dispatch(action: Action, targets: ActionTargets) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::post_action(&action).await;
        match &result {
            Ok(resp) => leptos::logging::log!("{} ok: {:?}", action.path(), resp.message),
            Err(e) => leptos::logging::warn!("{} failed: {e}", action.path()),
        }
        apply_outcome(resolve_outcome(&action, &result), &targets);
    });
}

#[cfg(not(feature = "csr"))]
pub fn dispatch(action: Action, _targets: ActionTargets) {
    leptos::logging::warn!("{} skipped: no browser", action.path());
}

#[cfg(feature = "csr")]
fn apply_outcome(outcome: ActionOutcome, targets: &ActionTargets) {
    if let Some(active) = outcome.mic_active {
        targets.activity.maybe_update(|a| a.set(Indicator::Mic, active));
    }
    if let Some(active) = outcome.timer_active {
        targets.activity.maybe_update(|a| a.set(Indicator::Timer, active));
    }
    if let Some(label) = outcome.user_label.as_deref() {
        targets.transcript.maybe_update(|t| t.set_user_label(label));
    }
    if outcome.clear_transcript {
        targets.transcript.update(TranscriptState::clear);
    }
    if outcome.clear_draft {
        targets.composer.update(ComposerState::reset_draft);
    }
    if outcome.stop_polling {
        targets.poller.stop();
    }
    if outcome.end_session {
        let time = crate::util::clock::now().to_string();
        targets.transcript.maybe_update(|t| t.push_local_system(SESSION_ENDED_NOTICE, time));
        targets.activity.maybe_update(ActivityState::end_session);
    }
    if let Some(message) = outcome.alert.as_deref() {
        crate::util::dom::alert(message);
    }
}
