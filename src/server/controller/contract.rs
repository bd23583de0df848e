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
        insurer::{ContractDto, ContractInputDto},
    },
    server::{
        error::Error,
        model::{app::AppState, page::Pagination},
        service::{
            cascade::{CascadeService, EntityKind},
            contract::ContractService,
        },
    },
};

pub static CONTRACT_TAG: &str = "contratos";

/// Create a contract for an existing insurer
#[utoipa::path(
    post,
    path = "/contratos/",
    tag = CONTRACT_TAG,
    request_body = ContractInputDto,
    responses(
        (status = 200, description = "Contract created", body = ContractDto),
        (status = 400, description = "Blank field, negative cap or end date before start date", body = ErrorDto),
        (status = 404, description = "Insurer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contract(
    State(state): State<AppState>,
    Json(input): Json<ContractInputDto>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db, &state.cache)
        .create(input)
        .await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// List a page of contracts
#[utoipa::path(
    get,
    path = "/contratos/",
    tag = CONTRACT_TAG,
    params(Pagination),
    responses(
        (status = 200, description = "Page of contracts ordered by ID", body = Vec<ContractDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_contracts(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<impl IntoResponse, Error> {
    let contracts = ContractService::new(&state.db, &state.cache)
        .list(page)
        .await?;

    Ok((StatusCode::OK, Json(contracts)))
}

/// Get a contract by ID
#[utoipa::path(
    get,
    path = "/contratos/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    responses(
        (status = 200, description = "The contract", body = ContractDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db, &state.cache)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Replace every field of a contract
#[utoipa::path(
    put,
    path = "/contratos/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    request_body = ContractInputDto,
    responses(
        (status = 200, description = "Contract updated", body = ContractDto),
        (status = 400, description = "Blank field, negative cap or end date before start date", body = ErrorDto),
        (status = 404, description = "Contract or insurer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ContractInputDto>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db, &state.cache)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Delete a contract
#[utoipa::path(
    delete,
    path = "/contratos/{id}",
    tag = CONTRACT_TAG,
    params(("id" = i32, Path, description = "Contract ID")),
    responses(
        (status = 200, description = "Rows removed per table", body = DeleteReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contract(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let report = CascadeService::new(&state.db, &state.cache)
        .delete(EntityKind::Contract, id)
        .await?;

    Ok((StatusCode::OK, Json(report)))
}
