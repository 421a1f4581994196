use super::*;
use crate::net::types::{User, UserRole};

fn account(role: UserRole) -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        role,
        email_verified: true,
    }
}

fn customer() -> AuthState {
    AuthState::from_user(Some(&account(UserRole::Customer)))
}

fn admin() -> AuthState {
    AuthState::from_user(Some(&account(UserRole::Admin)))
}

fn render_gated(state: AuthState, require_admin: bool, with_fallback: bool) -> String {
    Owner::new().with(|| {
        let state = Signal::stored(state);
        if with_fallback {
            view! {
                <AuthWrapper
                    require_auth=true
                    require_admin=require_admin
                    state=state
                    fallback=|| view! { <i>"FALLBACK"</i> }
                >
                    <b>"SECRET"</b>
                </AuthWrapper>
            }
            .to_html()
        } else {
            view! {
                <AuthWrapper require_auth=true require_admin=require_admin state=state>
                    <b>"SECRET"</b>
                </AuthWrapper>
            }
            .to_html()
        }
    })
}

#[test]
fn signed_out_renders_fallback_only() {
    let html = render_gated(AuthState::from_user(None), false, true);
    assert!(html.contains("<i>FALLBACK</i>"));
    assert!(!html.contains("SECRET"));
}

#[test]
fn signed_out_without_fallback_renders_nothing() {
    let html = render_gated(AuthState::from_user(None), false, false);
    assert!(!html.contains("SECRET"));
    assert!(!html.contains("FALLBACK"));
}

#[test]
fn loading_renders_fallback_not_children() {
    let html = render_gated(AuthState::loading(), false, true);
    assert!(html.contains("FALLBACK"));
    assert!(!html.contains("SECRET"));
}

#[test]
fn signed_in_renders_children() {
    let html = render_gated(customer(), false, true);
    assert!(html.contains("<b>SECRET</b>"));
    assert!(!html.contains("FALLBACK"));
}

#[test]
fn admin_requirement_blocks_customers() {
    let html = render_gated(customer(), true, true);
    assert!(html.contains("FALLBACK"));
    assert!(!html.contains("SECRET"));

    let html = render_gated(admin(), true, true);
    assert!(html.contains("SECRET"));
}

#[test]
fn ungated_renders_children_without_auth_context() {
    // No AuthProvider in scope: reading the context would panic.
    let html = Owner::new().with(|| {
        view! {
            <AuthWrapper>
                <b>"SECRET"</b>
            </AuthWrapper>
        }
        .to_html()
    });
    assert!(html.contains("<b>SECRET</b>"));
}
