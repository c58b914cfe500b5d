//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clocks, downloads) from
//! page and component logic; each has a native fallback so callers stay
//! testable.

pub mod browser;
pub mod download;
pub mod format;
pub mod storage;
