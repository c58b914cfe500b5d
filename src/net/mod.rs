//! Networking modules for the image backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the wire schema, and `error`
//! classifies failures for the UI.

pub mod api;
pub mod error;
pub mod types;
