//! Input checks run before any write.

use chrono::NaiveDate;

use crate::server::error::store::StoreError;

/// Rejects empty or whitespace-only input, returning the value as submitted.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<String, StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation {
            field,
            reason: "must not be blank".to_string(),
        });
    }

    Ok(value.to_string())
}

pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64, StoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(StoreError::Validation {
            field,
            reason: format!("must be a non-negative number, got {}", value),
        });
    }

    Ok(value)
}

/// Rejects an end date earlier than its start date.
pub fn require_date_order(
    field: &'static str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(), StoreError> {
    if end < start {
        return Err(StoreError::Validation {
            field,
            reason: format!("{} is before the start date {}", end, start),
        });
    }

    Ok(())
}
