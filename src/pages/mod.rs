//! Routed page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-out pages (login, register, activation, password reset) render
//! inside a `CentralContainer`; signed-in pages (dashboard, settings) render
//! inside the navigation layout. All remote work goes through the `Gateway`
//! from context.

pub mod activate;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod password_reset;
pub mod register;
pub mod settings;
