//! Route paths shared by the router, navigation links and redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards and forms navigate by these constants so a path only changes in
//! one place. `next` query values are untrusted input and pass through
//! [`sanitize_next`] before any navigation uses them.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const SHOP: &str = "/shop";
pub const ABOUT: &str = "/about";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const CONFIRM_EMAIL: &str = "/confirm-email";
pub const ACCOUNT: &str = "/account";
pub const ADMIN: &str = "/admin";

/// Path of a category listing.
pub fn category(slug: &str) -> String {
    format!("{SHOP}/{slug}")
}

/// Path of a product detail page.
pub fn product(slug: &str) -> String {
    format!("/product/{slug}")
}

/// Login path that returns the viewer to `from` after signing in.
///
/// The login page itself and the home page are never used as return targets.
pub fn login_with_next(from: &str) -> String {
    match sanitize_next(Some(from)) {
        Some(next) if next != HOME && next != LOGIN => format!("{LOGIN}?next={}", urlencoding::encode(&next)),
        _ => LOGIN.to_owned(),
    }
}

/// Accept only same-site absolute paths as post-login destinations.
pub fn sanitize_next(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if !raw.starts_with('/') || raw.starts_with("//") || raw.contains('\\') {
        return None;
    }
    if raw.chars().any(char::is_control) {
        return None;
    }
    Some(raw.to_owned())
}
