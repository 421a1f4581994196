//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, form state, backend
//! calls) and delegates rendering details to `components`.

pub mod about;
pub mod account;
pub mod admin;
pub mod category;
pub mod confirm_email;
pub mod home;
pub mod login;
pub mod not_found;
pub mod product;
pub mod register;
pub mod shop;
