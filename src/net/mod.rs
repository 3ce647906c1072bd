//! Networking modules for the name log REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` performs the HTTP calls, and `error`
//! turns failed calls into the single-line message shown to the user.

pub mod api;
pub mod error;
pub mod types;
