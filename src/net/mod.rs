//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request construction (and with it, request authorization),
//! `error` the failure taxonomy, `types` the shared wire schema, and the
//! remaining modules map one-to-one onto the server's endpoint groups.

pub mod auth;
pub mod claims;
pub mod error;
pub mod http;
pub mod items;
pub mod reports;
pub mod types;
