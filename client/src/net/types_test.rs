use super::*;

#[test]
fn user_role_parses_admin() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "a@b.com",
        "name": "Ada",
        "role": "admin",
        "email_verified": true
    }))
    .unwrap();
    assert!(user.is_admin());
    assert!(user.email_verified);
}

#[test]
fn user_role_defaults_to_customer_when_missing() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u2",
        "email": "c@d.com",
        "name": "Cy"
    }))
    .unwrap();
    assert_eq!(user.role, UserRole::Customer);
    assert!(!user.email_verified);
}

#[test]
fn unknown_role_is_treated_as_customer() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u3",
        "email": "e@f.com",
        "name": "Ed",
        "role": "wholesale"
    }))
    .unwrap();
    assert!(!user.is_admin());
    assert_eq!(user.role, UserRole::Customer);
}

#[test]
fn user_role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), serde_json::json!("admin"));
    assert_eq!(serde_json::to_value(UserRole::Customer).unwrap(), serde_json::json!("customer"));
    assert_eq!(serde_json::from_value::<UserRole>(serde_json::json!("customer")).unwrap(), UserRole::Customer);
}

#[test]
fn api_message_success_requires_exact_status() {
    let ok = ApiMessage { status: "success".to_owned(), message: "ok".to_owned() };
    let failed = ApiMessage { status: "error".to_owned(), message: "expired".to_owned() };
    let shouty = ApiMessage { status: "SUCCESS".to_owned(), message: String::new() };
    assert!(ok.is_success());
    assert!(!failed.is_success());
    assert!(!shouty.is_success());
}

#[test]
fn api_message_tolerates_missing_message() {
    let msg: ApiMessage = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert_eq!(msg.message, "");
}

#[test]
fn login_response_user_is_optional() {
    let resp: LoginResponse = serde_json::from_str(r#"{"status":"error","message":"bad credentials"}"#).unwrap();
    assert!(resp.user.is_none());
    assert_eq!(resp.message, "bad credentials");
}
