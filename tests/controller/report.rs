//! Tests for the report endpoints.

use axum::{
    body::to_bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::{Duration, Local};
use clinitrack::{
    model::{insurer::ContractDto, report::InsurerTotalDto},
    server::controller::report::{
        export_project_progress, get_expiring_contracts, get_insurer_totals,
    },
};

use super::*;

/// Expect a contract ending today+10 to be listed and one ending today+31 not to be
#[tokio::test]
async fn expiring_contracts_use_thirty_day_window() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let sura = test.insurer().insert_insurer("Sura").await?;
    let today = Local::now().date_naive();
    let soon = test
        .insurer()
        .insert_contract(sura.id, "Urgencias", today + Duration::days(10), 100.0)
        .await?;
    test.insurer()
        .insert_contract(sura.id, "Consulta", today + Duration::days(31), 100.0)
        .await?;

    let resp = get_expiring_contracts(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let contracts: Vec<ContractDto> = json_body(resp).await;
    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].id, soon.id);

    Ok(())
}

/// Expect totals only for insurers with contracts
#[tokio::test]
async fn insurer_totals_use_inner_join() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let sura = test.insurer().insert_insurer("Sura").await?;
    test.insurer().insert_insurer("Sanitas").await?;
    let end = factory::date(2025, 12, 31);
    test.insurer()
        .insert_contract(sura.id, "Urgencias", end, 1000.0)
        .await?;
    test.insurer()
        .insert_contract(sura.id, "Consulta", end, 500.0)
        .await?;

    let resp = get_insurer_totals(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    let totals: Vec<InsurerTotalDto> = json_body(resp).await;
    assert_eq!(
        totals,
        vec![InsurerTotalDto {
            name: "Sura".to_string(),
            contract_count: 2,
            monthly_cap_total: 1500.0,
        }]
    );

    Ok(())
}

/// Expect a CSV download with the export header and one row per project
#[tokio::test]
async fn progress_export_is_csv() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let (_, _, project) = test
        .hierarchy()
        .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
        .await?;
    test.hierarchy().insert_task(project.id, "Finalizada").await?;
    test.hierarchy().insert_task(project.id, "Finalizada").await?;
    test.hierarchy().insert_task(project.id, "Pendiente").await?;

    let resp = export_project_progress(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Proyecto,Responsable,Pendiente,En curso,Finalizada,Avance (%)",
            "Q1 Rollout,Test Owner,1,0,2,66.7",
        ]
    );

    Ok(())
}
