//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over [`sea_orm::ConnectionTrait`]
//! so services can run several of them inside a single transaction.

pub mod contract;
pub mod insurer;
pub mod process;
pub mod project;
pub mod subprocess;
pub mod task;
