//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form feedback while reading the session
//! store and gateway from Leptos context.

pub mod central_container;
pub mod form_feedback;
pub mod side_bar;
pub mod top_nav;
