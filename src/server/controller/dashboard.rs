use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, report::DashboardDto},
    server::{
        error::Error,
        model::{app::AppState, selection::SelectionContext},
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "tablero";

/// Hierarchy view for the current selection
///
/// Selected IDs that no longer exist, or no longer belong to the selected parent, are
/// dropped together with everything below them. The pruned selection is returned so the
/// client can carry it into the next request.
#[utoipa::path(
    get,
    path = "/tablero/",
    tag = DASHBOARD_TAG,
    params(SelectionContext),
    responses(
        (status = 200, description = "Dashboard for the pruned selection", body = DashboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(selection): Query<SelectionContext>,
) -> Result<impl IntoResponse, Error> {
    let dashboard = DashboardService::new(&state.db, &state.cache)
        .view(&selection)
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}
