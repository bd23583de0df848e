//! Data transfer objects shared by the HTTP API and its clients.
//!
//! JSON field names follow the clinic's Spanish vocabulary (`nombre`, `proceso_id`, ...)
//! to match the persisted schema.

pub mod api;
pub mod hierarchy;
pub mod insurer;
pub mod report;
