use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hierarchy::{
            DeleteReportDto, ProcessDto, ProcessInputDto, ProcessWithSubprocessDto,
            ProcessWithSubprocessInputDto,
        },
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{
            cascade::{CascadeService, EntityKind},
            hierarchy::process::ProcessService,
        },
    },
};

pub static PROCESS_TAG: &str = "procesos";

/// Create a process
#[utoipa::path(
    post,
    path = "/procesos/",
    tag = PROCESS_TAG,
    request_body = ProcessInputDto,
    responses(
        (status = 200, description = "Process created", body = ProcessDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A process with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_process(
    State(state): State<AppState>,
    Json(input): Json<ProcessInputDto>,
) -> Result<impl IntoResponse, Error> {
    let process = ProcessService::new(&state.db, &state.cache)
        .create(input)
        .await?;

    Ok((StatusCode::OK, Json(process)))
}

/// Create a process together with its first subprocess
#[utoipa::path(
    post,
    path = "/procesos/con-subproceso/",
    tag = PROCESS_TAG,
    request_body = ProcessWithSubprocessInputDto,
    responses(
        (status = 200, description = "Process and subprocess created", body = ProcessWithSubprocessDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 409, description = "A process with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_process_with_subprocess(
    State(state): State<AppState>,
    Json(input): Json<ProcessWithSubprocessInputDto>,
) -> Result<impl IntoResponse, Error> {
    let created = ProcessService::new(&state.db, &state.cache)
        .create_with_subprocess(input)
        .await?;

    Ok((StatusCode::OK, Json(created)))
}

/// List every process, most recently created first
#[utoipa::path(
    get,
    path = "/procesos/",
    tag = PROCESS_TAG,
    responses(
        (status = 200, description = "All processes", body = Vec<ProcessDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_processes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let processes = ProcessService::new(&state.db, &state.cache).list().await?;

    Ok((StatusCode::OK, Json(processes)))
}

/// Get a process by ID
#[utoipa::path(
    get,
    path = "/procesos/{id}",
    tag = PROCESS_TAG,
    params(("id" = i32, Path, description = "Process ID")),
    responses(
        (status = 200, description = "The process", body = ProcessDto),
        (status = 404, description = "Process not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_process(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let process = ProcessService::new(&state.db, &state.cache).get(id).await?;

    Ok((StatusCode::OK, Json(process)))
}

/// Rename a process
#[utoipa::path(
    put,
    path = "/procesos/{id}",
    tag = PROCESS_TAG,
    params(("id" = i32, Path, description = "Process ID")),
    request_body = ProcessInputDto,
    responses(
        (status = 200, description = "Process updated", body = ProcessDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Process not found", body = ErrorDto),
        (status = 409, description = "A process with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_process(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ProcessInputDto>,
) -> Result<impl IntoResponse, Error> {
    let process = ProcessService::new(&state.db, &state.cache)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(process)))
}

/// Delete a process with all of its subprocesses, projects and tasks
///
/// Deleting a process that does not exist succeeds with an all-zero report.
#[utoipa::path(
    delete,
    path = "/procesos/{id}",
    tag = PROCESS_TAG,
    params(("id" = i32, Path, description = "Process ID")),
    responses(
        (status = 200, description = "Rows removed per table", body = DeleteReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_process(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = CascadeService::new(&state.db, &state.cache)
        .delete(EntityKind::Process, id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
