//! Create, read and update operations for the Process → Subprocess → Project → Task
//! hierarchy.
//!
//! Every write validates its input, runs in one transaction, and invalidates the
//! [`DatasetCache`](crate::server::service::cache::DatasetCache) after commit. Listing reads
//! come from the cache; single-record reads go to the database. Deletes live in
//! [`cascade`](crate::server::service::cascade).

pub mod process;
pub mod project;
pub mod subprocess;
pub mod task;
