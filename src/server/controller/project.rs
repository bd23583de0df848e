use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hierarchy::{DeleteReportDto, ProjectDto, ProjectInputDto},
        report::ProgressDto,
    },
    server::{
        error::Error,
        model::{app::AppState, selection::SelectionContext},
        service::{
            cascade::{CascadeService, EntityKind},
            hierarchy::project::ProjectService,
        },
    },
};

pub static PROJECT_TAG: &str = "proyectos";

/// Create a project under an existing subprocess
///
/// The project's process is taken from the subprocess.
#[utoipa::path(
    post,
    path = "/proyectos/",
    tag = PROJECT_TAG,
    request_body = ProjectInputDto,
    responses(
        (status = 200, description = "Project created", body = ProjectDto),
        (status = 400, description = "Blank name or responsible", body = ErrorDto),
        (status = 404, description = "Subprocess not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<ProjectInputDto>,
) -> Result<impl IntoResponse, Error> {
    let project = ProjectService::new(&state.db, &state.cache)
        .create(input)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

/// List projects matching the selected process and subprocess
#[utoipa::path(
    get,
    path = "/proyectos/",
    tag = PROJECT_TAG,
    params(SelectionContext),
    responses(
        (status = 200, description = "Matching projects", body = Vec<ProjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(selection): Query<SelectionContext>,
) -> Result<impl IntoResponse, Error> {
    let projects = ProjectService::new(&state.db, &state.cache)
        .list(&selection)
        .await?;

    Ok((StatusCode::OK, Json(projects)))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/proyectos/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "The project", body = ProjectDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let project = ProjectService::new(&state.db, &state.cache).get(id).await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Replace every field of a project
#[utoipa::path(
    put,
    path = "/proyectos/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    request_body = ProjectInputDto,
    responses(
        (status = 200, description = "Project updated", body = ProjectDto),
        (status = 400, description = "Blank name or responsible", body = ErrorDto),
        (status = 404, description = "Project or subprocess not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ProjectInputDto>,
) -> Result<impl IntoResponse, Error> {
    let project = ProjectService::new(&state.db, &state.cache)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

/// Delete a project with its tasks
#[utoipa::path(
    delete,
    path = "/proyectos/{id}",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Rows removed per table", body = DeleteReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = CascadeService::new(&state.db, &state.cache)
        .delete(EntityKind::Project, id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Task-state counts and completion percentage of a project
#[utoipa::path(
    get,
    path = "/proyectos/{id}/avance",
    tag = PROJECT_TAG,
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project progress", body = ProgressDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_project_progress(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let progress = ProjectService::new(&state.db, &state.cache)
        .progress(id)
        .await?;

    Ok((StatusCode::OK, Json(progress)))
}
