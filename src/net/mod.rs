//! Networking modules for the poll, stream, and action endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `poller` drives the snapshot loop, `stream`
//! manages the server-sent event lifecycle, and `types` defines the wire
//! schema. `error` holds the shared failure taxonomy.

pub mod api;
pub mod error;
pub mod poller;
pub mod stream;
pub mod types;
