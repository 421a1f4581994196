//! REST client for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through the
//! SSR host's `/api` proxy so the session cookie stays same-site.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`; auth state is
//! only resolved in the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Backend failure envelopes
//! become `ApiError::Rejected` carrying the backend's message so pages can
//! show it verbatim. Calls are bounded by [`REQUEST_TIMEOUT`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::types::{ApiMessage, User};
#[cfg(feature = "hydrate")]
use super::types::{ConfirmEmailRequest, LoginRequest, LoginResponse, RegisterRequest, ResendConfirmationRequest};

/// Prefix of every backend route as seen from the browser.
pub const API_BASE: &str = "/api";

/// Upper bound for a single backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend refused the operation; the message is user-facing.
    #[error("{0}")]
    Rejected(String),
    /// Non-success HTTP status without a usable message.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("the request timed out, please try again")]
    Timeout,
    /// Called outside the browser.
    #[error("not available during server rendering")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Map a non-2xx response to an error, preferring the backend's own message.
#[cfg(any(test, feature = "hydrate"))]
fn error_for_status(status: u16, body: Option<ApiMessage>) -> ApiError {
    match body {
        Some(msg) if !msg.message.trim().is_empty() => ApiError::Rejected(msg.message),
        _ => ApiError::Status(status),
    }
}

/// Turn a `{status, message}` envelope into a result.
#[cfg(any(test, feature = "hydrate"))]
fn message_into_result(msg: ApiMessage) -> Result<ApiMessage, ApiError> {
    if msg.is_success() {
        return Ok(msg);
    }
    if msg.message.trim().is_empty() {
        return Err(ApiError::Rejected(format!("request was not accepted ({})", msg.status)));
    }
    Err(ApiError::Rejected(msg.message))
}

/// Statuses `GET /auth/me` uses for "no session".
#[cfg(any(test, feature = "hydrate"))]
fn is_signed_out_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T, F>(fut: F) -> Result<T, ApiError>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
{
    use futures::future::{Either, select};

    let timeout = gloo_timers::future::sleep(REQUEST_TIMEOUT);
    futures::pin_mut!(fut);
    futures::pin_mut!(timeout);
    match select(fut, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
    let url = endpoint(path);
    with_timeout(async {
        gloo_net::http::Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    })
    .await
}

/// Read a `{status, message}` envelope without judging its `status`.
#[cfg(feature = "hydrate")]
async fn read_envelope(resp: gloo_net::http::Response) -> Result<ApiMessage, ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.json::<ApiMessage>().await;
    if !ok {
        return Err(error_for_status(status, body.ok()));
    }
    body.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the signed-in account from `/api/auth/me`.
///
/// Returns `Ok(None)` when there is no session.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or answers unexpectedly.
pub async fn fetch_current_user() -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint("/auth/me");
        let resp = with_timeout(async {
            gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))
        })
        .await?;
        if is_signed_out_status(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let user = resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the backend message for bad credentials.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/auth/login", &LoginRequest { email, password }).await?;
        let ok = resp.ok();
        let status = resp.status();
        let body = resp.json::<LoginResponse>().await;
        if !ok {
            let envelope = body.ok().map(|b| ApiMessage { status: b.status, message: b.message });
            return Err(error_for_status(status, envelope));
        }
        let body = body.map_err(|e| ApiError::Decode(e.to_string()))?;
        message_into_result(ApiMessage { status: body.status, message: body.message })?;
        body.user.ok_or_else(|| ApiError::Decode("login response is missing the user".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// On success the backend sends a confirmation link; the returned message
/// says so.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the backend message when registration
/// is refused (e.g. the email is taken).
pub async fn register(name: &str, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/auth/register", &RegisterRequest { name, email, password }).await?;
        let msg = message_into_result(read_envelope(resp).await?)?;
        Ok(msg.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error if the request could not be delivered.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/auth/logout", &serde_json::json!({})).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Confirm an email address via `POST /api/auth/confirm-email`.
///
/// The envelope is returned as-is; callers decide what a non-success
/// `status` means for them.
///
/// # Errors
///
/// Returns an error for transport failures and non-2xx responses.
pub async fn confirm_email(token: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/auth/confirm-email", &ConfirmEmailRequest { token }).await?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Ask for a fresh confirmation link via `POST /api/auth/resend-confirmation`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the backend message when refused.
pub async fn resend_confirmation(email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/auth/resend-confirmation", &ResendConfirmationRequest { email }).await?;
        let msg = message_into_result(read_envelope(resp).await?)?;
        Ok(msg.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}
