use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hierarchy::{DeleteReportDto, SubprocessDto, SubprocessInputDto},
    },
    server::{
        error::Error,
        model::{app::AppState, selection::SelectionContext},
        service::{
            cascade::{CascadeService, EntityKind},
            hierarchy::subprocess::SubprocessService,
        },
    },
};

pub static SUBPROCESS_TAG: &str = "subprocesos";

/// Create a subprocess under an existing process
#[utoipa::path(
    post,
    path = "/subprocesos/",
    tag = SUBPROCESS_TAG,
    request_body = SubprocessInputDto,
    responses(
        (status = 200, description = "Subprocess created", body = SubprocessDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Process not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subprocess(
    State(state): State<AppState>,
    Json(input): Json<SubprocessInputDto>,
) -> Result<impl IntoResponse, Error> {
    let subprocess = SubprocessService::new(&state.db, &state.cache)
        .create(input)
        .await?;

    Ok((StatusCode::OK, Json(subprocess)))
}

/// List subprocesses, optionally only those of the selected process
#[utoipa::path(
    get,
    path = "/subprocesos/",
    tag = SUBPROCESS_TAG,
    params(SelectionContext),
    responses(
        (status = 200, description = "Matching subprocesses", body = Vec<SubprocessDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_subprocesses(
    State(state): State<AppState>,
    Query(selection): Query<SelectionContext>,
) -> Result<impl IntoResponse, Error> {
    let subprocesses = SubprocessService::new(&state.db, &state.cache)
        .list(&selection)
        .await?;

    Ok((StatusCode::OK, Json(subprocesses)))
}

/// Get a subprocess by ID
#[utoipa::path(
    get,
    path = "/subprocesos/{id}",
    tag = SUBPROCESS_TAG,
    params(("id" = i32, Path, description = "Subprocess ID")),
    responses(
        (status = 200, description = "The subprocess", body = SubprocessDto),
        (status = 404, description = "Subprocess not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subprocess(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let subprocess = SubprocessService::new(&state.db, &state.cache)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(subprocess)))
}

/// Replace a subprocess's name and owning process
#[utoipa::path(
    put,
    path = "/subprocesos/{id}",
    tag = SUBPROCESS_TAG,
    params(("id" = i32, Path, description = "Subprocess ID")),
    request_body = SubprocessInputDto,
    responses(
        (status = 200, description = "Subprocess updated", body = SubprocessDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Subprocess or process not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subprocess(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<SubprocessInputDto>,
) -> Result<impl IntoResponse, Error> {
    let subprocess = SubprocessService::new(&state.db, &state.cache)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(subprocess)))
}

/// Delete a subprocess with its projects and tasks
#[utoipa::path(
    delete,
    path = "/subprocesos/{id}",
    tag = SUBPROCESS_TAG,
    params(("id" = i32, Path, description = "Subprocess ID")),
    responses(
        (status = 200, description = "Rows removed per table", body = DeleteReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subprocess(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = CascadeService::new(&state.db, &state.cache)
        .delete(EntityKind::Subprocess, id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
