//! Date arithmetic for reports.

use chrono::{Duration, NaiveDate};

use crate::server::error::Error;

/// Last end date included in the expiry report.
///
/// # Returns
/// - `Ok(NaiveDate)` - `today` plus `window_days`
/// - `Err(Error::ParseError)` - The window pushes the date outside the supported range
pub fn expiry_cutoff(today: NaiveDate, window_days: i64) -> Result<NaiveDate, Error> {
    let window = Duration::try_days(window_days).ok_or_else(|| {
        Error::ParseError(format!("Expiry window of {} days is out of range", window_days))
    })?;

    today.checked_add_signed(window).ok_or_else(|| {
        Error::ParseError(format!(
            "Failed to add {} days to {} for the expiry cutoff",
            window_days, today
        ))
    })
}

/// Signed number of days a task ended after its projected date.
pub fn deviation_days(end_date: NaiveDate, projected_date: NaiveDate) -> i64 {
    (end_date - projected_date).num_days()
}
