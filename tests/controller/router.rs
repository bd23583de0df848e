//! End-to-end tests driving the full router with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use clinitrack::{
    model::{
        hierarchy::{ProcessDto, SubprocessDto},
        report::DashboardDto,
    },
    server::{model::app::AppState, router},
};
use clinitrack_test_utils::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::json;
use tower::ServiceExt;

fn app(test: &TestContext) -> Router {
    router::routes().with_state(test.to_app_state::<AppState>())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

/// Expect a second process with the same name to get 409 and leave one row
#[tokio::test]
async fn duplicate_process_returns_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, _) = send(&app, post_json("/procesos/", json!({"nombre": "Admissions"}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post_json("/procesos/", json!({"nombre": "Admissions"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: serde_json::Value = parse(&body);
    assert!(error["error"].as_str().unwrap().contains("Admissions"));

    let (_, body) = send(&app, request("GET", "/procesos/")).await;
    let processes: Vec<ProcessDto> = parse(&body);
    assert_eq!(processes.len(), 1);

    Ok(())
}

/// Expect the combined form to create a process with its first subprocess
#[tokio::test]
async fn process_with_subprocess_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        post_json(
            "/procesos/con-subproceso/",
            json!({"nombre": "Admissions", "subproceso": "Intake"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created: serde_json::Value = parse(&body);
    let process_id = created["proceso"]["id"].as_i64().unwrap();

    let (_, body) = send(
        &app,
        request("GET", &format!("/subprocesos/?proceso_id={}", process_id)),
    )
    .await;
    let subprocesses: Vec<SubprocessDto> = parse(&body);
    assert_eq!(subprocesses.len(), 1);
    assert_eq!(subprocesses[0].name, "Intake");

    Ok(())
}

/// Expect an unknown status label to be rejected before any write
#[tokio::test]
async fn unknown_task_status_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let (_, _, project) = test
        .hierarchy()
        .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
        .await?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        post_json(
            "/tareas/",
            json!({
                "proyecto_id": project.id,
                "descripcion": "Train front desk",
                "responsable": "Ana",
                "fecha_inicio": "2025-02-01",
                "fecha_fin": "2025-02-10",
                "estado": "Cancelada",
                "fecha_proyectada": "2025-02-07"
            }),
        ),
    )
    .await;

    assert!(status.is_client_error());
    let (_, body) = send(&app, request("GET", "/tareas/")).await;
    let tasks: Vec<serde_json::Value> = parse(&body);
    assert!(tasks.is_empty());

    Ok(())
}

/// Expect a dashboard selection under a deleted process to come back pruned and empty
#[tokio::test]
async fn dashboard_prunes_selection_after_delete() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let (process, subprocess, project) = test
        .hierarchy()
        .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
        .await?;
    test.hierarchy().insert_task(project.id, "Finalizada").await?;
    let app = app(&test);
    let uri = format!(
        "/tablero/?proceso_id={}&subproceso_id={}&proyecto_id={}",
        process.id, subprocess.id, project.id
    );

    let (_, body) = send(&app, request("GET", &uri)).await;
    let before: DashboardDto = parse(&body);
    assert_eq!(before.tasks.len(), 1);
    assert_eq!(before.progress.map(|p| p.completion_pct), Some(100.0));

    let (status, _) = send(&app, request("DELETE", &format!("/procesos/{}", process.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request("GET", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    let after: DashboardDto = parse(&body);
    assert_eq!(after.selection.process_id, None);
    assert!(after.processes.is_empty());
    assert!(after.tasks.is_empty());
    assert!(after.progress.is_none());

    Ok(())
}

/// Expect an oversized limit to be capped instead of failing the request
#[tokio::test]
async fn insurer_list_caps_oversized_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    test.insurer().insert_insurer("Sura").await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        request("GET", "/aseguradoras/?limit=18446744073709551615"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let insurers: Vec<serde_json::Value> = parse(&body);
    assert_eq!(insurers.len(), 1);

    Ok(())
}

/// Expect 400 for an offset beyond the database's integer range
#[tokio::test]
async fn contract_list_rejects_oversized_skip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        request("GET", "/contratos/?skip=18446744073709551615"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: serde_json::Value = parse(&body);
    assert!(error["error"].as_str().unwrap().contains("skip"));

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, request("GET", "/api/docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = parse(&body);
    assert!(doc["paths"]["/procesos/"].is_object());
    assert!(doc["paths"]["/informes/avance-proyectos/csv"].is_object());

    Ok(())
}
