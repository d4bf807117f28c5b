//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Session state is the only application-wide state; page forms keep their
//! own local signals.

pub mod session;
