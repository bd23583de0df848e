//! Database fixtures and in-memory model factories.
//!
//! - `hierarchy` - processes, subprocesses, projects and tasks
//! - `insurer` - insurers and their contracts
//! - `factory` - models built without touching the database

pub mod factory;
pub mod hierarchy;
pub mod insurer;
