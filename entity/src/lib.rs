//! SeaORM entities for the clinitrack schema.
//!
//! Table and column names follow the persisted Spanish schema (`procesos`, `subprocesos`,
//! `proyectos`, `tareas`, `aseguradoras`, `contratos`) while the Rust fields use English names.

pub mod prelude;

pub mod contract;
pub mod insurer;
pub mod process;
pub mod project;
pub mod subprocess;
pub mod task;
