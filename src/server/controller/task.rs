use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hierarchy::{DeleteReportDto, TaskDto, TaskInputDto},
    },
    server::{
        error::Error,
        model::{app::AppState, selection::SelectionContext},
        service::{
            cascade::{CascadeService, EntityKind},
            hierarchy::task::TaskService,
        },
    },
};

pub static TASK_TAG: &str = "tareas";

/// Create a task under an existing project
#[utoipa::path(
    post,
    path = "/tareas/",
    tag = TASK_TAG,
    request_body = TaskInputDto,
    responses(
        (status = 200, description = "Task created", body = TaskDto),
        (status = 400, description = "Blank field or end date before start date", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<TaskInputDto>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskService::new(&state.db, &state.cache)
        .create(input)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}

/// List tasks of the projects matching the selection
#[utoipa::path(
    get,
    path = "/tareas/",
    tag = TASK_TAG,
    params(SelectionContext),
    responses(
        (status = 200, description = "Matching tasks", body = Vec<TaskDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(selection): Query<SelectionContext>,
) -> Result<impl IntoResponse, Error> {
    let tasks = TaskService::new(&state.db, &state.cache)
        .list(&selection)
        .await?;

    Ok((StatusCode::OK, Json(tasks)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tareas/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "The task", body = TaskDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskService::new(&state.db, &state.cache).get(id).await?;

    Ok((StatusCode::OK, Json(task)))
}

/// Replace every field of a task
#[utoipa::path(
    put,
    path = "/tareas/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = TaskInputDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "Blank field or end date before start date", body = ErrorDto),
        (status = 404, description = "Task or project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<TaskInputDto>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskService::new(&state.db, &state.cache)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tareas/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Rows removed per table", body = DeleteReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = CascadeService::new(&state.db, &state.cache)
        .delete(EntityKind::Task, id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
