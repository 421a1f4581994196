use super::*;
use crate::net::types::UserRole;

fn user(role: UserRole) -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        role,
        email_verified: true,
    }
}

#[test]
fn default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading);
    assert!(!state.is_authenticated);
    assert!(!state.is_admin);
}

#[test]
fn from_user_none_is_settled_signed_out() {
    let state = AuthState::from_user(None);
    assert_eq!(state, AuthState { is_authenticated: false, is_admin: false, is_loading: false });
}

#[test]
fn from_user_customer() {
    let state = AuthState::from_user(Some(&user(UserRole::Customer)));
    assert!(state.is_signed_in());
    assert!(!state.is_signed_in_admin());
}

#[test]
fn from_user_admin() {
    let state = AuthState::from_user(Some(&user(UserRole::Admin)));
    assert!(state.is_signed_in_admin());
}

#[test]
fn loading_flags_are_not_authoritative() {
    let state = AuthState { is_authenticated: true, is_admin: true, is_loading: true };
    assert!(!state.is_signed_in());
    assert!(!state.is_signed_in_admin());
}
