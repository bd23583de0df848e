use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        hierarchy::DeleteReportDto,
        insurer::{InsurerDto, InsurerInputDto},
    },
    server::{
        error::Error,
        model::{app::AppState, page::Pagination},
        service::{
            cascade::{CascadeService, EntityKind},
            insurer::InsurerService,
        },
    },
};

pub static INSURER_TAG: &str = "aseguradoras";

/// Create an insurer
#[utoipa::path(
    post,
    path = "/aseguradoras/",
    tag = INSURER_TAG,
    request_body = InsurerInputDto,
    responses(
        (status = 200, description = "Insurer created", body = InsurerDto),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 409, description = "An insurer with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_insurer(
    State(state): State<AppState>,
    Json(input): Json<InsurerInputDto>,
) -> Result<impl IntoResponse, Error> {
    let insurer = InsurerService::new(&state.db, &state.cache)
        .create(input)
        .await?;

    Ok((StatusCode::OK, Json(insurer)))
}

/// List a page of insurers, each with its contracts
#[utoipa::path(
    get,
    path = "/aseguradoras/",
    tag = INSURER_TAG,
    params(Pagination),
    responses(
        (status = 200, description = "Page of insurers ordered by ID", body = Vec<InsurerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_insurers(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<impl IntoResponse, Error> {
    let insurers = InsurerService::new(&state.db, &state.cache)
        .list(page)
        .await?;

    Ok((StatusCode::OK, Json(insurers)))
}

/// Get an insurer with its contracts
#[utoipa::path(
    get,
    path = "/aseguradoras/{id}",
    tag = INSURER_TAG,
    params(("id" = i32, Path, description = "Insurer ID")),
    responses(
        (status = 200, description = "The insurer", body = InsurerDto),
        (status = 404, description = "Insurer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insurer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let insurer = InsurerService::new(&state.db, &state.cache).get(id).await?;

    Ok((StatusCode::OK, Json(insurer)))
}

/// Replace every field of an insurer
#[utoipa::path(
    put,
    path = "/aseguradoras/{id}",
    tag = INSURER_TAG,
    params(("id" = i32, Path, description = "Insurer ID")),
    request_body = InsurerInputDto,
    responses(
        (status = 200, description = "Insurer updated", body = InsurerDto),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 404, description = "Insurer not found", body = ErrorDto),
        (status = 409, description = "An insurer with this name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_insurer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<InsurerInputDto>,
) -> Result<impl IntoResponse, Error> {
    let insurer = InsurerService::new(&state.db, &state.cache)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(insurer)))
}

/// Delete an insurer with its contracts
#[utoipa::path(
    delete,
    path = "/aseguradoras/{id}",
    tag = INSURER_TAG,
    params(("id" = i32, Path, description = "Insurer ID")),
    responses(
        (status = 200, description = "Rows removed per table", body = DeleteReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_insurer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = CascadeService::new(&state.db, &state.cache)
        .delete(EntityKind::Insurer, id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
