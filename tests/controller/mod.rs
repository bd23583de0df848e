//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with extractors built by hand, against an in-memory
//! SQLite database created by the real migrations.

mod contract;
mod insurer;
mod process;
mod project;
mod report;
mod router;

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

pub use clinitrack_test_utils::prelude::*;

/// Deserializes a JSON response body.
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");

    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}
