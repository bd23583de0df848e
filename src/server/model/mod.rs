//! Server application models and type definitions.
//!
//! Holds the application state shared by handlers, database model type aliases with their
//! DTO conversions, list pagination parameters, and the explicit selection context carried
//! between dashboard interactions.

pub mod app;
pub mod db;
pub mod page;
pub mod selection;
