use super::*;

#[test]
fn plausible_emails() {
    assert!(is_plausible_email("ada@example.com"));
    assert!(is_plausible_email("a.b+tag@mail.example.co"));
}

#[test]
fn implausible_emails() {
    for email in ["", "ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "ada@exa mple.com", "ada@.com", "ada@example."] {
        assert!(!is_plausible_email(email), "{email:?}");
    }
}

#[test]
fn validate_register_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input("  Ada ", " ada@example.com ", "longenough", "longenough"),
        Ok(RegisterInput {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "longenough".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_name() {
    assert_eq!(validate_register_input("  ", "ada@example.com", "longenough", "longenough"), Err("Enter your name."));
}

#[test]
fn validate_register_input_requires_valid_email() {
    assert_eq!(validate_register_input("Ada", "ada", "longenough", "longenough"), Err("Enter a valid email address."));
}

#[test]
fn validate_register_input_enforces_password_length() {
    assert_eq!(
        validate_register_input("Ada", "ada@example.com", "short", "short"),
        Err("Use at least 8 characters for your password.")
    );
}

#[test]
fn validate_register_input_requires_matching_confirmation() {
    assert_eq!(
        validate_register_input("Ada", "ada@example.com", "longenough", "longenougH"),
        Err("Passwords do not match.")
    );
}
