use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    model::{
        api::ErrorDto,
        insurer::ContractDto,
        report::{InsurerTotalDto, ProgressDto, TaskDeviationDto},
    },
    server::{error::Error, model::app::AppState, service::report::ReportService},
};

pub static REPORT_TAG: &str = "informes";

static PROGRESS_CSV_FILENAME: &str = "avance_proyectos.csv";

/// Contract count and summed monthly cap per insurer
///
/// Insurers without contracts are omitted. Rows are ordered by insurer name.
#[utoipa::path(
    get,
    path = "/informes/total-por-aseguradora/",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Totals per insurer", body = Vec<InsurerTotalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insurer_totals(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let totals = ReportService::new(&state.db, &state.cache)
        .insurer_totals()
        .await?;

    Ok((StatusCode::OK, Json(totals)))
}

/// Contracts ending within the configured window from today
///
/// Contracts that already ended are included. Rows are ordered by end date.
#[utoipa::path(
    get,
    path = "/informes/vencimientos-proximos/",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Contracts expiring soon", body = Vec<ContractDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expiring_contracts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let today = Local::now().date_naive();
    let contracts = ReportService::new(&state.db, &state.cache)
        .expiring_contracts(today, state.expiry_window_days)
        .await?;

    Ok((StatusCode::OK, Json(contracts)))
}

/// Progress of every project
#[utoipa::path(
    get,
    path = "/informes/avance-proyectos/",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Progress per project", body = Vec<ProgressDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_progress_report(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let progress = ReportService::new(&state.db, &state.cache)
        .project_progress()
        .await?;

    Ok((StatusCode::OK, Json(progress)))
}

/// Progress of every project as a CSV download
#[utoipa::path(
    get,
    path = "/informes/avance-proyectos/csv",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "CSV export", body = String, content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_project_progress(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let csv = ReportService::new(&state.db, &state.cache)
        .project_progress_csv()
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", PROGRESS_CSV_FILENAME),
            ),
        ],
        csv,
    ))
}

/// Signed deviation in days between each task's end date and projected date
#[utoipa::path(
    get,
    path = "/informes/desviaciones/",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Deviation per task", body = Vec<TaskDeviationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task_deviations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let deviations = ReportService::new(&state.db, &state.cache)
        .deviations()
        .await?;

    Ok((StatusCode::OK, Json(deviations)))
}
