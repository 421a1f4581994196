//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) so components depend on small
//! focused models. These are plain data; reactive wrappers live with the
//! components that own them.

pub mod auth;
pub mod toast;
