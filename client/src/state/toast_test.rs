use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Success, "two");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "two");
}

#[test]
fn push_drops_oldest_past_capacity() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Info, format!("t{i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "t2");
    assert_eq!(state.items[MAX_TOASTS - 1].message, format!("t{}", MAX_TOASTS + 1));
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "a");
    let b = state.push(ToastKind::Error, "b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b");
    assert_ne!(a, b);
}

#[test]
fn kind_classes() {
    assert_eq!(ToastKind::Success.class(), "toast toast--success");
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}
