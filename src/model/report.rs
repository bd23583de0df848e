use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::hierarchy::{ProcessDto, ProjectDto, SubprocessDto, TaskDto};

/// Task-state counts and completion percentage for one project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProgressDto {
    #[serde(rename = "proyecto_id")]
    pub project_id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "pendiente")]
    pub pending: u64,
    #[serde(rename = "en_curso")]
    pub in_progress: u64,
    #[serde(rename = "finalizada")]
    pub done: u64,
    pub total: u64,
    /// Percentage of tasks done, rounded to one decimal; 0 when the project has no tasks
    #[serde(rename = "avance")]
    pub completion_pct: f64,
}

/// Contract count and summed monthly cap for one insurer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InsurerTotalDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "total_contratos")]
    pub contract_count: u64,
    #[serde(rename = "total_techo")]
    pub monthly_cap_total: f64,
}

/// Signed difference between a task's end date and its projected date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TaskDeviationDto {
    #[serde(rename = "tarea_id")]
    pub task_id: i32,
    #[serde(rename = "proyecto_id")]
    pub project_id: i32,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
    #[serde(rename = "fecha_proyectada")]
    pub projected_date: NaiveDate,
    /// Negative when finished early, positive when late
    #[serde(rename = "desviacion_dias")]
    pub deviation_days: i64,
}

/// Current process/subprocess/project selection after pruning references to rows that
/// no longer exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SelectionDto {
    #[serde(rename = "proceso_id")]
    pub process_id: Option<i32>,
    #[serde(rename = "subproceso_id")]
    pub subprocess_id: Option<i32>,
    #[serde(rename = "proyecto_id")]
    pub project_id: Option<i32>,
}

/// Everything needed to render the hierarchy view for a selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    #[serde(rename = "seleccion")]
    pub selection: SelectionDto,
    #[serde(rename = "procesos")]
    pub processes: Vec<ProcessDto>,
    #[serde(rename = "subprocesos")]
    pub subprocesses: Vec<SubprocessDto>,
    #[serde(rename = "proyectos")]
    pub projects: Vec<ProjectDto>,
    #[serde(rename = "tareas")]
    pub tasks: Vec<TaskDto>,
    #[serde(rename = "avance")]
    pub progress: Option<ProgressDto>,
}
