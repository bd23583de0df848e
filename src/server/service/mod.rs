//! Service layer for business logic.
//!
//! Services validate input, run each write as one transaction over the repositories in
//! [`data`](crate::server::data), and invalidate the read cache once the transaction
//! commits. Reads for listings and reports are served from [`cache::DatasetCache`].

pub mod cache;
pub mod cascade;
pub mod contract;
pub mod dashboard;
pub mod hierarchy;
pub mod insurer;
pub mod report;
