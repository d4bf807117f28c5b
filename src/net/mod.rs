//! Networking modules for the users API and the notification channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the auth gateway pages call, `transport` moves HTTP requests,
//! `channel` owns the live push connection, `types` and `error` define the
//! wire schema and failure taxonomy.

pub mod api;
pub mod channel;
pub mod error;
pub mod transport;
pub mod types;
