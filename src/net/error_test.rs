use super::*;

fn response(success: bool, message: Option<&str>, error: Option<&str>) -> ActionResponse {
    ActionResponse {
        success,
        message: message.map(ToOwned::to_owned),
        error: error.map(ToOwned::to_owned),
        ..ActionResponse::default()
    }
}

#[test]
fn check_success_passes_successful_response_through() {
    let resp = response(true, Some("Timer started"), None);
    assert_eq!(check_success(resp.clone()), Ok(resp));
}

#[test]
fn check_success_prefers_server_message() {
    let err = check_success(response(false, Some("Invalid user ID"), Some("ignored"))).expect_err("should reject");
    assert_eq!(err, ApiError::Rejected("Invalid user ID".to_owned()));
    assert!(err.is_rejected());
}

#[test]
fn check_success_falls_back_to_error_field_then_default() {
    let with_error = check_success(response(false, None, Some("boom"))).expect_err("should reject");
    assert_eq!(with_error.to_string(), "boom");

    let bare = check_success(response(false, Some("  "), None)).expect_err("should reject");
    assert_eq!(bare.to_string(), "Request failed");
}

#[test]
fn transport_errors_are_not_rejections() {
    assert!(!ApiError::Transport("offline".to_owned()).is_rejected());
    assert!(!ApiError::Decode("bad json".to_owned()).is_rejected());
}

#[test]
fn error_messages_are_descriptive() {
    let status = ApiError::Status { path: "/update".to_owned(), status: 502 };
    assert_eq!(status.to_string(), "/update returned status 502");
    assert_eq!(StreamError::Closed.to_string(), "stream closed before completion");
}
