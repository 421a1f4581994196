//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and auth gates while reading shared
//! state from Leptos context providers.

pub mod auth_guard;
pub mod auth_provider;
pub mod auth_wrapper;
pub mod button;
pub mod loading_indicator;
pub mod product_card;
pub mod resend_link_form;
pub mod site_footer;
pub mod site_header;
pub mod toaster;
