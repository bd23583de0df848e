//! HTTP controller endpoints for the clinitrack API.
//!
//! Axum handlers for hierarchy CRUD, insurers and contracts, reports and the dashboard.
//! Handlers extract input, call a service, and return JSON; failures are returned as
//! [`Error`](crate::server::error::Error), which maps itself to a status code. Every
//! handler carries a utoipa annotation for the OpenAPI document.

pub mod contract;
pub mod dashboard;
pub mod insurer;
pub mod process;
pub mod project;
pub mod report;
pub mod subprocess;
pub mod task;
