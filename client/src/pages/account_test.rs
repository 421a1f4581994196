use super::*;

#[test]
fn role_labels() {
    assert_eq!(role_label(UserRole::Customer), "Member");
    assert_eq!(role_label(UserRole::Admin), "Administrator");
}
