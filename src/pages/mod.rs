//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own the async work behind their routes and apply results to the
//! shared state held in context.

pub mod gallery;
pub mod generate;
