//! Tests for the project endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use clinitrack::{
    model::{
        hierarchy::{ProjectDto, ProjectInputDto, WorkStatus},
        report::ProgressDto,
    },
    server::{
        controller::project::{create_project, get_project_progress, list_projects},
        model::{app::AppState, selection::SelectionContext},
    },
};

use super::*;

/// Expect progress of 66.7 for Admissions → Intake → Q1 Rollout with [Done, Done, Pending]
#[tokio::test]
async fn progress_of_two_done_out_of_three() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let (_, _, project) = test
        .hierarchy()
        .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
        .await?;
    test.hierarchy().insert_task(project.id, "Finalizada").await?;
    test.hierarchy().insert_task(project.id, "Finalizada").await?;
    test.hierarchy().insert_task(project.id, "Pendiente").await?;

    let resp = get_project_progress(State(test.to_app_state()), Path(project.id))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let progress: ProgressDto = json_body(resp).await;
    assert_eq!(progress.done, 2);
    assert_eq!(progress.pending, 1);
    assert_eq!(progress.in_progress, 0);
    assert_eq!(progress.total, 3);
    assert_eq!(progress.completion_pct, 66.7);

    Ok(())
}

/// Expect 0 % for a project without tasks
#[tokio::test]
async fn progress_without_tasks_is_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let (_, _, project) = test
        .hierarchy()
        .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
        .await?;

    let resp = get_project_progress(State(test.to_app_state()), Path(project.id))
        .await
        .unwrap()
        .into_response();

    let progress: ProgressDto = json_body(resp).await;
    assert_eq!(progress.total, 0);
    assert_eq!(progress.completion_pct, 0.0);

    Ok(())
}

/// Expect 404 when creating a project under a missing subprocess
#[tokio::test]
async fn create_under_missing_subprocess_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let state: AppState = test.to_app_state();

    let result = create_project(
        State(state.clone()),
        Json(ProjectInputDto {
            name: "Q1 Rollout".to_string(),
            responsible: "Ana".to_string(),
            status: WorkStatus::Pending,
            subprocess_id: 8,
            projected_date: factory::date(2025, 3, 31),
            completion_date: None,
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = list_projects(State(state), Query(SelectionContext::default()))
        .await
        .unwrap()
        .into_response();
    let listed: Vec<ProjectDto> = json_body(resp).await;
    assert!(listed.is_empty());

    Ok(())
}
