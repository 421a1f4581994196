use super::*;

#[test]
fn default_button_is_primary_medium() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default(), ""), "btn btn--primary btn--md");
}

#[test]
fn variants_map_to_modifiers() {
    let cases = [
        (ButtonVariant::Secondary, "btn--secondary"),
        (ButtonVariant::Outline, "btn--outline"),
        (ButtonVariant::Ghost, "btn--ghost"),
        (ButtonVariant::Link, "btn--link"),
        (ButtonVariant::Destructive, "btn--destructive"),
    ];
    for (variant, modifier) in cases {
        assert_eq!(button_class(variant, ButtonSize::Md, ""), format!("btn {modifier} btn--md"));
    }
}

#[test]
fn sizes_map_to_modifiers() {
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Sm, ""), "btn btn--primary btn--sm");
    assert_eq!(button_class(ButtonVariant::Primary, ButtonSize::Lg, ""), "btn btn--primary btn--lg");
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Icon, ""), "btn btn--ghost btn--icon");
}

#[test]
fn extra_classes_are_appended_trimmed() {
    assert_eq!(
        button_class(ButtonVariant::Outline, ButtonSize::Sm, "  hero__cta "),
        "btn btn--outline btn--sm hero__cta"
    );
    assert_eq!(button_class(ButtonVariant::Outline, ButtonSize::Sm, "   "), "btn btn--outline btn--sm");
}
