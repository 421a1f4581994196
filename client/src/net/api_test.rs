use super::*;

fn envelope(status: &str, message: &str) -> ApiMessage {
    ApiMessage { status: status.to_owned(), message: message.to_owned() }
}

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/auth/me"), "/api/auth/me");
}

#[test]
fn error_for_status_prefers_backend_message() {
    let err = error_for_status(400, Some(envelope("error", "Link expired")));
    assert_eq!(err, ApiError::Rejected("Link expired".to_owned()));
    assert_eq!(err.to_string(), "Link expired");
}

#[test]
fn error_for_status_falls_back_to_status_code() {
    assert_eq!(error_for_status(502, None), ApiError::Status(502));
    assert_eq!(error_for_status(500, Some(envelope("error", "  "))), ApiError::Status(500));
    assert_eq!(ApiError::Status(502).to_string(), "request failed with status 502");
}

#[test]
fn message_into_result_accepts_success() {
    let msg = message_into_result(envelope("success", "Check your inbox")).unwrap();
    assert_eq!(msg.message, "Check your inbox");
}

#[test]
fn message_into_result_rejects_other_statuses() {
    assert_eq!(
        message_into_result(envelope("error", "Email already registered")),
        Err(ApiError::Rejected("Email already registered".to_owned()))
    );
    assert_eq!(
        message_into_result(envelope("pending", "")),
        Err(ApiError::Rejected("request was not accepted (pending)".to_owned()))
    );
}

#[test]
fn signed_out_statuses() {
    assert!(is_signed_out_status(401));
    assert!(is_signed_out_status(403));
    assert!(!is_signed_out_status(500));
    assert!(!is_signed_out_status(200));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    futures::executor::block_on(async {
        assert_eq!(fetch_current_user().await, Err(ApiError::Unavailable));
        assert_eq!(confirm_email("t").await, Err(ApiError::Unavailable));
    });
}
