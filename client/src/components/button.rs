//! Button primitive with style variants.
//!
//! DESIGN
//! ======
//! Variants and sizes map to BEM modifier classes on `.btn`; the stylesheet
//! owns the look. `ButtonLink` renders the same classes on a router link so
//! call-to-action anchors match real buttons.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
    Destructive,
}

impl ButtonVariant {
    fn modifier(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Secondary => "btn--secondary",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Link => "btn--link",
            Self::Destructive => "btn--destructive",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    /// Square, for a single glyph.
    Icon,
}

impl ButtonSize {
    fn modifier(self) -> &'static str {
        match self {
            Self::Sm => "btn--sm",
            Self::Md => "btn--md",
            Self::Lg => "btn--lg",
            Self::Icon => "btn--icon",
        }
    }
}

/// Class list for a variant/size pair plus caller-supplied extras.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("btn {} {}", variant.modifier(), size.modifier())
    } else {
        format!("btn {} {} {extra}", variant.modifier(), size.modifier())
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=button_class(variant, size, &class)
            type=kind
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

/// Router link styled as a button.
#[component]
pub fn ButtonLink(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <A href=href attr:class=button_class(variant, size, &class)>
            {children()}
        </A>
    }
}
