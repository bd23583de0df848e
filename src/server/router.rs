//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa-axum so its annotation lands in one OpenAPI
//! document, served with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/procesos/`, `/procesos/{id}`, `/procesos/con-subproceso/`
/// - `/subprocesos/`, `/subprocesos/{id}`
/// - `/proyectos/`, `/proyectos/{id}`, `/proyectos/{id}/avance`
/// - `/tareas/`, `/tareas/{id}`
/// - `/aseguradoras/`, `/aseguradoras/{id}`
/// - `/contratos/`, `/contratos/{id}`
/// - `/informes/total-por-aseguradora/`, `/informes/vencimientos-proximos/`,
///   `/informes/avance-proyectos/`, `/informes/avance-proyectos/csv`,
///   `/informes/desviaciones/`
/// - `/tablero/`
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, config.expiry_window_days));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Clinitrack",
            description = "Process, project and insurer contract tracking API"
        ),
        tags(
            (name = controller::process::PROCESS_TAG, description = "Processes"),
            (name = controller::subprocess::SUBPROCESS_TAG, description = "Subprocesses"),
            (name = controller::project::PROJECT_TAG, description = "Projects and their progress"),
            (name = controller::task::TASK_TAG, description = "Tasks"),
            (name = controller::insurer::INSURER_TAG, description = "Insurers"),
            (name = controller::contract::CONTRACT_TAG, description = "Insurer contracts"),
            (name = controller::report::REPORT_TAG, description = "Reports and exports"),
            (name = controller::dashboard::DASHBOARD_TAG, description = "Hierarchy dashboard"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::process::list_processes,
            controller::process::create_process
        ))
        .routes(routes!(controller::process::create_process_with_subprocess))
        .routes(routes!(
            controller::process::get_process,
            controller::process::update_process,
            controller::process::delete_process
        ))
        .routes(routes!(
            controller::subprocess::list_subprocesses,
            controller::subprocess::create_subprocess
        ))
        .routes(routes!(
            controller::subprocess::get_subprocess,
            controller::subprocess::update_subprocess,
            controller::subprocess::delete_subprocess
        ))
        .routes(routes!(
            controller::project::list_projects,
            controller::project::create_project
        ))
        .routes(routes!(
            controller::project::get_project,
            controller::project::update_project,
            controller::project::delete_project
        ))
        .routes(routes!(controller::project::get_project_progress))
        .routes(routes!(
            controller::task::list_tasks,
            controller::task::create_task
        ))
        .routes(routes!(
            controller::task::get_task,
            controller::task::update_task,
            controller::task::delete_task
        ))
        .routes(routes!(
            controller::insurer::list_insurers,
            controller::insurer::create_insurer
        ))
        .routes(routes!(
            controller::insurer::get_insurer,
            controller::insurer::update_insurer,
            controller::insurer::delete_insurer
        ))
        .routes(routes!(
            controller::contract::list_contracts,
            controller::contract::create_contract
        ))
        .routes(routes!(
            controller::contract::get_contract,
            controller::contract::update_contract,
            controller::contract::delete_contract
        ))
        .routes(routes!(controller::report::get_insurer_totals))
        .routes(routes!(controller::report::get_expiring_contracts))
        .routes(routes!(controller::report::get_project_progress_report))
        .routes(routes!(controller::report::export_project_progress))
        .routes(routes!(controller::report::get_task_deviations))
        .routes(routes!(controller::dashboard::get_dashboard))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
