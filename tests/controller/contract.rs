//! Tests for the contract endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use clinitrack::{
    model::insurer::{ContractDto, ContractInputDto},
    server::controller::contract::create_contract,
};

use super::*;

fn input(insurer_id: i32) -> ContractInputDto {
    ContractInputDto {
        name: "Urgencias".to_string(),
        start_date: factory::date(2025, 1, 1),
        end_date: factory::date(2025, 12, 31),
        rate_type: "ISS".to_string(),
        monthly_cap: 2500.0,
        conditions: Some("Requiere autorización previa".to_string()),
        insurer_id,
    }
}

/// Expect 200 with every submitted field stored
#[tokio::test]
async fn create_returns_contract() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let sura = test.insurer().insert_insurer("Sura").await?;

    let resp = create_contract(State(test.to_app_state()), Json(input(sura.id)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let contract: ContractDto = json_body(resp).await;
    assert_eq!(contract.insurer_id, sura.id);
    assert_eq!(contract.rate_type, "ISS");
    assert_eq!(contract.monthly_cap, 2500.0);
    assert_eq!(
        contract.conditions.as_deref(),
        Some("Requiere autorización previa")
    );

    Ok(())
}

/// Expect 400 when the contract ends before it starts
#[tokio::test]
async fn end_before_start_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let sura = test.insurer().insert_insurer("Sura").await?;

    let mut bad = input(sura.id);
    bad.end_date = factory::date(2024, 12, 31);
    let result = create_contract(State(test.to_app_state()), Json(bad)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for a missing insurer
#[tokio::test]
async fn missing_insurer_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = create_contract(State(test.to_app_state()), Json(input(77))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
