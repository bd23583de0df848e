use thiserror::Error;

/// Failure while building the in-memory schema or inserting fixture rows
///
/// Test functions return `Result<(), TestError>` so fixture setup can use `?`.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting, migrating, creating tables or inserting fixtures failed
    #[error("Test database setup failed: {0}")]
    DbErr(#[from] sea_orm::DbErr),
}
