use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of a store operation that the caller can act on.
///
/// None of these leave partial state behind: validation runs before any write, and
/// conflicts or missing parents abort the surrounding transaction.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required field is blank or a value is out of range
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Field that failed validation, using its API name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
    /// A unique name is already taken
    #[error("A {entity} named {name:?} already exists")]
    Conflict {
        /// Kind of record, e.g. `process`
        entity: &'static str,
        /// The duplicated name
        name: String,
    },
    /// The requested record does not exist
    #[error("No {entity} with ID {id} exists")]
    NotFound {
        /// Kind of record, e.g. `project`
        entity: &'static str,
        /// Requested ID
        id: i32,
    },
    /// A referenced parent record does not exist
    #[error("Referenced {entity} with ID {id} does not exist")]
    ParentNotFound {
        /// Kind of parent record
        entity: &'static str,
        /// Referenced ID
        id: i32,
    },
}

impl StoreError {
    /// Classifies a failed write on a uniquely named record.
    ///
    /// Unique constraint violations become [`StoreError::Conflict`]; anything else is
    /// passed through as a database error.
    pub fn from_unique_violation(
        err: DbErr,
        entity: &'static str,
        name: &str,
    ) -> crate::server::error::Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::Conflict {
                entity,
                name: name.to_string(),
            }
            .into(),
            _ => crate::server::error::Error::DbErr(err),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } | Self::ParentNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match &self {
            Self::Conflict { .. } => tracing::warn!("{}", self),
            _ => tracing::debug!("{}", self),
        }

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
