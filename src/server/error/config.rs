use std::net::AddrParseError;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures. The binary reports these and exits before serving.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set, e.g. DATABASE_URL=sqlite://clinitrack.db?mode=rwc")]
    MissingEnvVar(&'static str),
    /// The variable is set but its value is unusable
    #[error("Invalid value for {var}: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
    #[error("BIND_ADDRESS {value:?} is not a socket address: {source}")]
    InvalidBindAddress {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
