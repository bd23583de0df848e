//! Tests for the process endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use clinitrack::{
    model::hierarchy::{DeleteReportDto, ProcessDto, ProcessInputDto},
    server::{
        controller::process::{create_process, delete_process, get_process, list_processes},
        model::app::AppState,
    },
};

use super::*;

fn input(name: &str) -> Json<ProcessInputDto> {
    Json(ProcessInputDto {
        name: name.to_string(),
    })
}

/// Expect 200 and the new process in the list
#[tokio::test]
async fn create_then_list_returns_process() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let state: AppState = test.to_app_state();

    let resp = create_process(State(state.clone()), input("Admissions"))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: ProcessDto = json_body(resp).await;

    let resp = list_processes(State(state)).await.unwrap().into_response();
    let listed: Vec<ProcessDto> = json_body(resp).await;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].name, "Admissions");

    Ok(())
}

/// Expect 409 for a duplicate name with exactly one process remaining
#[tokio::test]
async fn duplicate_name_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let state: AppState = test.to_app_state();

    create_process(State(state.clone()), input("Admissions"))
        .await
        .unwrap();
    let result = create_process(State(state.clone()), input("Admissions")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = list_processes(State(state)).await.unwrap().into_response();
    let listed: Vec<ProcessDto> = json_body(resp).await;
    assert_eq!(listed.len(), 1);

    Ok(())
}

/// Expect 400 for a blank name
#[tokio::test]
async fn blank_name_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = create_process(State(test.to_app_state()), input("  ")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 for a missing process
#[tokio::test]
async fn get_missing_process_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = get_process(State(test.to_app_state()), Path(12)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect delete to report every removed row
#[tokio::test]
async fn delete_reports_cascade() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let (process, _, project) = test
        .hierarchy()
        .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
        .await?;
    test.hierarchy().insert_task(project.id, "Pendiente").await?;

    let resp = delete_process(State(test.to_app_state()), Path(process.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: DeleteReportDto = json_body(resp).await;
    assert_eq!(
        report,
        DeleteReportDto {
            processes: 1,
            subprocesses: 1,
            projects: 1,
            tasks: 1,
            ..Default::default()
        }
    );

    Ok(())
}

/// Expect 200 with an empty report when deleting a missing process
#[tokio::test]
async fn delete_missing_process_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    test.hierarchy().insert_process("Admissions").await?;
    let state: AppState = test.to_app_state();

    let resp = delete_process(State(state.clone()), Path(404))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let report: DeleteReportDto = json_body(resp).await;
    assert!(report.is_empty());

    let resp = list_processes(State(state)).await.unwrap().into_response();
    let listed: Vec<ProcessDto> = json_body(resp).await;
    assert_eq!(listed.len(), 1);

    Ok(())
}
