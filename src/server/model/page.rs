use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::error::store::StoreError;

/// Default number of rows returned by a paginated list.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Largest page a client may request; larger limits are capped to it.
pub const MAX_PAGE_LIMIT: u64 = 1000;

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

/// Offset pagination for insurer and contract lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Rows to skip, default 0
    #[serde(default)]
    pub skip: u64,
    /// Maximum rows to return, default 100
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    /// Caps `limit` at [`MAX_PAGE_LIMIT`] and rejects offsets SQLite cannot bind
    ///
    /// SQLite integers are signed 64-bit, so `skip` must not exceed `i64::MAX`.
    pub fn bounded(self) -> Result<Self, StoreError> {
        if i64::try_from(self.skip).is_err() {
            return Err(StoreError::Validation {
                field: "skip",
                reason: format!("must be at most {}", i64::MAX),
            });
        }

        Ok(Self {
            skip: self.skip,
            limit: self.limit.min(MAX_PAGE_LIMIT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_oversized_limit() {
        let page = Pagination {
            skip: 0,
            limit: u64::MAX,
        }
        .bounded()
        .unwrap();

        assert_eq!(page.limit, MAX_PAGE_LIMIT);
    }

    #[test]
    fn keeps_limit_within_bounds() {
        let page = Pagination { skip: 5, limit: 20 }.bounded().unwrap();

        assert_eq!(page, Pagination { skip: 5, limit: 20 });
    }

    #[test]
    fn rejects_skip_beyond_signed_range() {
        let result = Pagination {
            skip: i64::MAX as u64 + 1,
            limit: 10,
        }
        .bounded();

        assert!(matches!(
            result,
            Err(StoreError::Validation { field: "skip", .. })
        ));
    }
}
