//! `/api/*` forwarding to the storefront REST backend.
//!
//! The browser only ever talks to this host, so session cookies stay
//! first-party. Requests are relayed with a small allow-list of headers in
//! each direction; anything else (hop-by-hop headers, host, content-length)
//! is rebuilt by the HTTP stacks on either side.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

const REQUEST_HEADERS: [HeaderName; 4] =
    [header::COOKIE, header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

const RESPONSE_HEADERS: [HeaderName; 3] = [header::SET_COOKIE, header::CONTENT_TYPE, header::CACHE_CONTROL];

/// Relay one API call upstream and hand the answer back unchanged.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(url) = upstream_url(&state.config.api_base_url, &path, query.as_deref()) else {
        return error_response(StatusCode::BAD_REQUEST, "invalid API path");
    };

    let request = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &REQUEST_HEADERS))
        .body(body);

    let upstream = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "api proxy request failed");
            return error_response(StatusCode::BAD_GATEWAY, "storefront API is unavailable");
        }
    };

    let status = upstream.status();
    let response_headers = filter_headers(upstream.headers(), &RESPONSE_HEADERS);
    match upstream.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%method, %url, status = status.as_u16(), "api proxy");
            (status, response_headers, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "api proxy body read failed");
            error_response(StatusCode::BAD_GATEWAY, "storefront API response was interrupted")
        }
    }
}

/// Join the backend base URL with the captured path and query. Returns `None`
/// for paths that try to climb out of the base with `..` segments.
///
/// `path` arrives percent-decoded from the `Path` extractor, so each segment
/// is encoded again; a decoded `?` or `#` must not become URL syntax.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Option<String> {
    let path = path.trim_start_matches('/');
    if path.split('/').any(|segment| segment == ".." || segment == ".") {
        return None;
    }
    let path = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    let mut url = format!("{}/{path}", base.trim_end_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    Some(url)
}

/// Copy only the allow-listed headers (all values, in order).
pub(crate) fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "error", "message": message }))).into_response()
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
