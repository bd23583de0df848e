//! Utility functions for server operations.
//!
//! Pure aggregation over loaded models (task progress, insurer totals, contract expiry),
//! date arithmetic, input validation and CSV export. Services feed these with rows from
//! the read cache so they never touch the database themselves.

pub mod contract;
pub mod export;
pub mod progress;
pub mod time;
pub mod validation;
