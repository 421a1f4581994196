use super::*;

#[test]
fn selection_summary_full_choice() {
    assert_eq!(selection_summary(Some("Slate"), Some("M")), "Slate, size M");
}

#[test]
fn selection_summary_prompts_for_missing_parts() {
    assert_eq!(selection_summary(Some("Slate"), None), "Slate, select a size");
    assert_eq!(selection_summary(None, Some("L")), "Size L, select a color");
    assert_eq!(selection_summary(None, None), "Select a color and size");
}
