//! Server application core modules.
//!
//! This module contains all server-side functionality for clinitrack: HTTP routing, the
//! SeaORM repositories over the process/project and insurer/contract schema, the services
//! enforcing validation, uniqueness and cascading deletes, and the progress and contract
//! aggregations behind the reports.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
