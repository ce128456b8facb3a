//! REST helpers for the poll and action endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning `ApiError::Transport`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so callers branch explicitly
//! between transport failures and server-side rejections.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::error::check_success;
use super::types::{ActionResponse, UpdateResponse};
#[cfg(feature = "csr")]
use crate::config::UPDATE_PATH;

/// A user-initiated POST action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    StartMic,
    StopMic,
    StartTimer,
    StopTimer,
    Clear,
    EndChat,
    SetUserId(String),
    SendMessage(String),
}

impl Action {
    pub fn path(&self) -> &'static str {
        match self {
            Action::StartMic => "/start",
            Action::StopMic => "/stop",
            Action::StartTimer => "/start_timer",
            Action::StopTimer => "/stop_timer",
            Action::Clear => "/clear",
            Action::EndChat => "/end_chat",
            Action::SetUserId(_) => "/set_user_id",
            Action::SendMessage(_) => "/send_message",
        }
    }

    /// Form fields sent as `application/x-www-form-urlencoded`.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Action::SetUserId(user_id) => vec![("user_id", user_id.as_str())],
            Action::SendMessage(text) => vec![("message_text", text.as_str())],
            _ => Vec::new(),
        }
    }
}

#[cfg(feature = "csr")]
fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Fetch the full conversation state from `GET /update`.
///
/// # Errors
///
/// Returns a transport, status, or decode error; never `Rejected`.
pub async fn fetch_update() -> Result<UpdateResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(UPDATE_PATH).send().await.map_err(transport)?;
        if !resp.ok() {
            return Err(ApiError::Status { path: UPDATE_PATH.to_owned(), status: resp.status() });
        }
        resp.json::<UpdateResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// POST an action and decode its JSON body.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the server reports `success: false`,
/// otherwise a transport, status, or decode error.
pub async fn post_action(action: &Action) -> Result<ActionResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let path = action.path();
        let builder = gloo_net::http::Request::post(path);
        let fields = action.form_fields();
        let request = if fields.is_empty() {
            builder.build()
        } else {
            let params = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
            for (key, value) in fields {
                params.append(key, value);
            }
            builder.body(params)
        }
        .map_err(transport)?;

        let resp = request.send().await.map_err(transport)?;
        if !resp.ok() {
            return Err(ApiError::Status { path: path.to_owned(), status: resp.status() });
        }
        let body: ActionResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        check_success(body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Transport(format!("{} not available outside the browser", action.path())))
    }
}
