//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`transcript`, `scroll`, `activity`, etc.) so
//! components depend on small focused models. Everything here is plain data
//! with pure transitions; signals wrap these types at the app root.

pub mod activity;
pub mod composer;
pub mod scroll;
pub mod stream;
pub mod transcript;
