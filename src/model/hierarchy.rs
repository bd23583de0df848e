use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Work state shared by projects and tasks.
///
/// Persisted as its Spanish label. Stored rows holding any other label are tolerated on
/// read and count for nothing when computing progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum WorkStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En curso")]
    InProgress,
    #[serde(rename = "Finalizada")]
    Done,
}

impl WorkStatus {
    pub const ALL: [WorkStatus; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Label stored in the `estado` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En curso",
            Self::Done => "Finalizada",
        }
    }

    /// Parses a stored label, returning `None` for anything outside the enumerated set.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProcessDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
}

/// Body for creating or renaming a process.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProcessInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Body for creating a process together with its first subprocess.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProcessWithSubprocessInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "subproceso")]
    pub subprocess_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProcessWithSubprocessDto {
    #[serde(rename = "proceso")]
    pub process: ProcessDto,
    #[serde(rename = "subproceso")]
    pub subprocess: SubprocessDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubprocessDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "proceso_id")]
    pub process_id: i32,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubprocessInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "proceso_id")]
    pub process_id: i32,
}

/// A project as stored.
///
/// `status` is the raw stored label so rows written with an unrecognized status can
/// still be listed.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProjectDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "proceso_id")]
    pub process_id: i32,
    #[serde(rename = "subproceso_id")]
    pub subprocess_id: i32,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_proyectada")]
    pub projected_date: NaiveDate,
    #[serde(rename = "fecha_cumplimiento")]
    pub completion_date: Option<NaiveDate>,
}

/// Full set of writable project fields, used for both creation and update.
///
/// The owning process is taken from the subprocess, never supplied separately.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ProjectInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "estado")]
    pub status: WorkStatus,
    #[serde(rename = "subproceso_id")]
    pub subprocess_id: i32,
    #[serde(rename = "fecha_proyectada")]
    pub projected_date: NaiveDate,
    #[serde(rename = "fecha_cumplimiento", default)]
    pub completion_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TaskDto {
    pub id: i32,
    #[serde(rename = "proyecto_id")]
    pub project_id: i32,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_proyectada")]
    pub projected_date: NaiveDate,
    #[serde(rename = "fecha_cumplimiento")]
    pub fulfillment_date: Option<NaiveDate>,
}

/// Full set of writable task fields, used for both creation and update.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TaskInputDto {
    #[serde(rename = "proyecto_id")]
    pub project_id: i32,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
    #[serde(rename = "estado")]
    pub status: WorkStatus,
    #[serde(rename = "fecha_proyectada")]
    pub projected_date: NaiveDate,
    #[serde(rename = "fecha_cumplimiento", default)]
    pub fulfillment_date: Option<NaiveDate>,
}

/// Number of rows removed by a cascading delete, per table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DeleteReportDto {
    #[serde(rename = "procesos")]
    pub processes: u64,
    #[serde(rename = "subprocesos")]
    pub subprocesses: u64,
    #[serde(rename = "proyectos")]
    pub projects: u64,
    #[serde(rename = "tareas")]
    pub tasks: u64,
    #[serde(rename = "aseguradoras")]
    pub insurers: u64,
    #[serde(rename = "contratos")]
    pub contracts: u64,
}

impl DeleteReportDto {
    pub fn total(&self) -> u64 {
        self.processes
            + self.subprocesses
            + self.projects
            + self.tasks
            + self.insurers
            + self.contracts
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
