//! Wire-protocol DTOs for the storefront backend.
//!
//! DESIGN
//! ======
//! The backend answers every mutating auth call with a `{status, message}`
//! envelope. Only `status == "success"` counts as success; anything else is a
//! failure whose `message` is shown to the viewer verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Status value the backend uses for successful operations.
pub const STATUS_SUCCESS: &str = "success";

/// Privilege level of a signed-in account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    /// Also covers roles this client doesn't know about.
    #[default]
    #[serde(other)]
    Customer,
}

/// The signed-in account as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend account identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub role: UserRole,
    /// Whether the account finished email confirmation.
    #[serde(default)]
    pub email_verified: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// `{status, message}` envelope returned by auth operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ConfirmEmailRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResendConfirmationRequest<'a> {
    pub email: &'a str,
}
