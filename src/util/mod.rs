//! Utility helpers shared across pages and the gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and form checks from
//! page logic to improve reuse and testability.

pub mod form;
pub mod location;
