//! Networking modules for the storefront backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls through the SSR host's `/api` proxy and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
