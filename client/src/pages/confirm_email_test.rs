use std::cell::{Cell, RefCell};
use std::future::ready;

use futures::executor::block_on;

use super::*;

/// Scripted confirmer that records every token it is asked about.
struct MockConfirmer {
    reply: Result<ApiMessage, ApiError>,
    calls: Cell<usize>,
    tokens: RefCell<Vec<String>>,
}

impl MockConfirmer {
    fn replying(reply: Result<ApiMessage, ApiError>) -> Self {
        Self { reply, calls: Cell::new(0), tokens: RefCell::new(Vec::new()) }
    }
}

impl EmailConfirmer for MockConfirmer {
    fn confirm_email(&self, token: &str) -> impl Future<Output = Result<ApiMessage, ApiError>> {
        self.calls.set(self.calls.get() + 1);
        self.tokens.borrow_mut().push(token.to_owned());
        ready(self.reply.clone())
    }
}

fn reply(status: &str, message: &str) -> ApiMessage {
    ApiMessage { status: status.to_owned(), message: message.to_owned() }
}

#[test]
fn missing_token_shows_static_message_without_calling_api() {
    let api = MockConfirmer::replying(Ok(reply("success", "ok")));
    let outcome = block_on(run_confirmation(&api, None));
    assert_eq!(outcome, ConfirmOutcome { state: ConfirmState::MissingToken, toast: None });
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn blank_token_counts_as_missing() {
    let api = MockConfirmer::replying(Ok(reply("success", "ok")));
    let outcome = block_on(run_confirmation(&api, Some("   ")));
    assert_eq!(outcome.state, ConfirmState::MissingToken);
    assert_eq!(api.calls.get(), 0);
}

#[test]
fn success_confirms_and_raises_success_toast() {
    let api = MockConfirmer::replying(Ok(reply("success", "ok")));
    let outcome = block_on(run_confirmation(&api, Some("tok-123")));
    assert_eq!(outcome.state, ConfirmState::Confirmed("ok".to_owned()));
    assert_eq!(outcome.toast, Some((ToastKind::Success, "ok".to_owned())));
    assert_eq!(api.calls.get(), 1);
    assert_eq!(*api.tokens.borrow(), vec!["tok-123".to_owned()]);
}

#[test]
fn token_is_trimmed_before_the_call() {
    let api = MockConfirmer::replying(Ok(reply("success", "ok")));
    block_on(run_confirmation(&api, Some(" tok-123\n")));
    assert_eq!(*api.tokens.borrow(), vec!["tok-123".to_owned()]);
}

#[test]
fn rejection_fails_with_the_rejection_message() {
    let api = MockConfirmer::replying(Err(ApiError::Rejected("Link expired".to_owned())));
    let outcome = block_on(run_confirmation(&api, Some("tok-123")));
    assert_eq!(outcome.state, ConfirmState::Failed("Link expired".to_owned()));
    assert_eq!(outcome.toast, Some((ToastKind::Error, "Link expired".to_owned())));
    assert_eq!(api.calls.get(), 1);
}

#[test]
fn non_success_status_fails_with_backend_message() {
    let api = MockConfirmer::replying(Ok(reply("error", "Token already used")));
    let outcome = block_on(run_confirmation(&api, Some("tok-123")));
    assert_eq!(outcome.state, ConfirmState::Failed("Token already used".to_owned()));
    assert_eq!(outcome.toast, Some((ToastKind::Error, "Token already used".to_owned())));
}

#[test]
fn empty_messages_fall_back_to_defaults() {
    let ok = MockConfirmer::replying(Ok(reply("success", "")));
    assert_eq!(
        block_on(run_confirmation(&ok, Some("t"))).state,
        ConfirmState::Confirmed(DEFAULT_CONFIRMED_MESSAGE.to_owned())
    );
    let failed = MockConfirmer::replying(Ok(reply("error", " ")));
    assert_eq!(
        block_on(run_confirmation(&failed, Some("t"))).state,
        ConfirmState::Failed(DEFAULT_FAILED_MESSAGE.to_owned())
    );
}

#[test]
fn timeout_is_reported_as_failure() {
    let api = MockConfirmer::replying(Err(ApiError::Timeout));
    let outcome = block_on(run_confirmation(&api, Some("t")));
    assert_eq!(outcome.state, ConfirmState::Failed(ApiError::Timeout.to_string()));
}

#[test]
fn initial_state_tracks_token_presence() {
    assert_eq!(initial_state(None), ConfirmState::MissingToken);
    assert_eq!(initial_state(Some("")), ConfirmState::MissingToken);
    assert_eq!(initial_state(Some("tok")), ConfirmState::Pending);
}
