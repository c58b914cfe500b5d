//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! These structs are held in `RwSignal`s provided through Leptos context.
//! Transitions are plain methods so they are tested without a browser.

pub mod auth;
pub mod composer;
pub mod gallery;
pub mod options;
pub mod request;
pub mod ui;
