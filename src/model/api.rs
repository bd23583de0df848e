use serde::{Deserialize, Serialize};

/// JSON body returned with every 4xx and 5xx response
///
/// Client errors carry the reason, e.g. `A process named "Admissions" already exists`;
/// internal failures only carry a generic message.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub error: String,
}
