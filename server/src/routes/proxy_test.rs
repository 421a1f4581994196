use super::*;
use axum::http::HeaderValue;

#[test]
fn upstream_url_joins_base_and_path() {
    assert_eq!(
        upstream_url("http://127.0.0.1:8080", "auth/me", None).as_deref(),
        Some("http://127.0.0.1:8080/auth/me")
    );
    assert_eq!(
        upstream_url("https://api.test/v1/", "/auth/login", None).as_deref(),
        Some("https://api.test/v1/auth/login")
    );
}

#[test]
fn upstream_url_keeps_query() {
    assert_eq!(
        upstream_url("http://api.test", "products", Some("page=2&q=wool")).as_deref(),
        Some("http://api.test/products?page=2&q=wool")
    );
    assert_eq!(upstream_url("http://api.test", "products", Some("")).as_deref(), Some("http://api.test/products"));
}

#[test]
fn upstream_url_rejects_dot_segments() {
    assert!(upstream_url("http://api.test/v1", "../admin", None).is_none());
    assert!(upstream_url("http://api.test/v1", "auth/./me", None).is_none());
    assert!(upstream_url("http://api.test/v1", "auth/../../x", None).is_none());
}

#[test]
fn upstream_url_reencodes_decoded_query_and_fragment() {
    assert_eq!(
        upstream_url("http://backend", "auth/me?role=admin", None).as_deref(),
        Some("http://backend/auth/me%3Frole%3Dadmin")
    );
    assert_eq!(
        upstream_url("http://backend", "auth/me#frag", Some("a=1")).as_deref(),
        Some("http://backend/auth/me%23frag?a=1")
    );
    assert_eq!(
        upstream_url("http://backend", "products/wool blend", None).as_deref(),
        Some("http://backend/products/wool%20blend")
    );
}

#[test]
fn upstream_url_encodes_control_characters() {
    let url = upstream_url("http://backend", "auth/me\r\nx", None).unwrap();
    assert!(!url.chars().any(char::is_control));
    assert_eq!(url, "http://backend/auth/me%0D%0Ax");
}

#[test]
fn filter_headers_keeps_only_allowed() {
    let mut source = HeaderMap::new();
    source.insert(header::COOKIE, HeaderValue::from_static("session=abc"));
    source.insert(header::HOST, HeaderValue::from_static("shop.test"));
    source.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    source.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

    let out = filter_headers(&source, &REQUEST_HEADERS);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::COOKIE).unwrap(), "session=abc");
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::CONNECTION).is_none());
}

#[test]
fn filter_headers_preserves_repeated_set_cookie() {
    let mut source = HeaderMap::new();
    source.append(header::SET_COOKIE, HeaderValue::from_static("session=abc; HttpOnly"));
    source.append(header::SET_COOKIE, HeaderValue::from_static("theme=dark"));
    source.insert(header::SERVER, HeaderValue::from_static("backend"));

    let out = filter_headers(&source, &RESPONSE_HEADERS);
    let cookies: Vec<_> = out.get_all(header::SET_COOKIE).iter().collect();
    assert_eq!(cookies.len(), 2);
    assert!(out.get(header::SERVER).is_none());
}

#[test]
fn error_response_is_json_envelope() {
    let response = error_response(StatusCode::BAD_GATEWAY, "down");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
}
