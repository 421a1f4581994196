//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep gating decisions and browser timers out of component
//! bodies so the decision logic is testable without a DOM.

pub mod auth;
pub mod notify;
