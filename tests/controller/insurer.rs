//! Tests for the insurer endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use clinitrack::{
    model::{
        hierarchy::DeleteReportDto,
        insurer::{InsurerDto, InsurerInputDto},
    },
    server::{
        controller::insurer::{create_insurer, delete_insurer, list_insurers},
        model::{app::AppState, page::Pagination},
    },
};

use super::*;

/// Expect the created insurer in the list with every submitted field
#[tokio::test]
async fn create_then_list_returns_insurer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let state: AppState = test.to_app_state();

    let resp = create_insurer(
        State(state.clone()),
        Json(InsurerInputDto {
            name: "Sura".to_string(),
            tax_id: "800.123.456-7".to_string(),
            contact: "contacto@sura.example".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: InsurerDto = json_body(resp).await;

    let resp = list_insurers(State(state), Query(Pagination::default()))
        .await
        .unwrap()
        .into_response();
    let listed: Vec<InsurerDto> = json_body(resp).await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].name, "Sura");
    assert_eq!(listed[0].tax_id, "800.123.456-7");
    assert_eq!(listed[0].contact, "contacto@sura.example");

    Ok(())
}

/// Expect skip and limit to page through insurers by ID
#[tokio::test]
async fn list_applies_pagination() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    test.insurer().insert_insurer("Sura").await?;
    let sanitas = test.insurer().insert_insurer("Sanitas").await?;
    test.insurer().insert_insurer("Nueva EPS").await?;

    let resp = list_insurers(
        State(test.to_app_state()),
        Query(Pagination { skip: 1, limit: 1 }),
    )
    .await
    .unwrap()
    .into_response();

    let listed: Vec<InsurerDto> = json_body(resp).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, sanitas.id);

    Ok(())
}

/// Expect deleting an insurer to remove its contracts
#[tokio::test]
async fn delete_removes_contracts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let sura = test.insurer().insert_insurer("Sura").await?;
    test.insurer()
        .insert_contract(sura.id, "Urgencias", factory::date(2025, 12, 31), 1000.0)
        .await?;

    let resp = delete_insurer(State(test.to_app_state()), Path(sura.id))
        .await
        .unwrap()
        .into_response();

    let report: DeleteReportDto = json_body(resp).await;
    assert_eq!(report.insurers, 1);
    assert_eq!(report.contracts, 1);

    Ok(())
}
