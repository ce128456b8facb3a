//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod actions;
pub mod clock;
#[cfg(feature = "csr")]
pub mod dom;
pub mod markdown;
