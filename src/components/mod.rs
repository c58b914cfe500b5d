//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome, image tiles, and the options editor while
//! reading shared state from Leptos context providers or explicit props.

pub mod header;
pub mod image_card;
pub mod image_detail;
pub mod options_panel;
