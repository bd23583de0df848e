//! Database model type aliases and their conversions into API DTOs.

use crate::model::{
    hierarchy::{ProcessDto, ProjectDto, SubprocessDto, TaskDto},
    insurer::{ContractDto, InsurerDto},
};

/// Type alias for the process (`procesos`) database model.
pub type ProcessModel = entity::process::Model;

/// Type alias for the subprocess (`subprocesos`) database model.
pub type SubprocessModel = entity::subprocess::Model;

/// Type alias for the project (`proyectos`) database model.
///
/// # Fields (from `entity::project::Model`)
/// - `status` - Stored label, may hold values outside [`WorkStatus`](crate::model::hierarchy::WorkStatus)
/// - `process_id` - Always the owning subprocess's process
/// - `completion_date` - Set once the project is finished
pub type ProjectModel = entity::project::Model;

/// Type alias for the task (`tareas`) database model.
pub type TaskModel = entity::task::Model;

/// Type alias for the insurer (`aseguradoras`) database model.
pub type InsurerModel = entity::insurer::Model;

/// Type alias for the contract (`contratos`) database model.
pub type ContractModel = entity::contract::Model;

impl From<ProcessModel> for ProcessDto {
    fn from(model: ProcessModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }
}

impl From<SubprocessModel> for SubprocessDto {
    fn from(model: SubprocessModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            process_id: model.process_id,
            created_at: model.created_at,
        }
    }
}

impl From<ProjectModel> for ProjectDto {
    fn from(model: ProjectModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            responsible: model.responsible,
            status: model.status,
            process_id: model.process_id,
            subprocess_id: model.subprocess_id,
            created_at: model.created_at,
            projected_date: model.projected_date,
            completion_date: model.completion_date,
        }
    }
}

impl From<TaskModel> for TaskDto {
    fn from(model: TaskModel) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            description: model.description,
            responsible: model.responsible,
            start_date: model.start_date,
            end_date: model.end_date,
            status: model.status,
            created_at: model.created_at,
            projected_date: model.projected_date,
            fulfillment_date: model.fulfillment_date,
        }
    }
}

impl From<ContractModel> for ContractDto {
    fn from(model: ContractModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            rate_type: model.rate_type,
            monthly_cap: model.monthly_cap,
            conditions: model.conditions,
            insurer_id: model.insurer_id,
        }
    }
}

/// Builds an insurer DTO together with its contracts.
pub fn insurer_dto(insurer: InsurerModel, contracts: Vec<ContractModel>) -> InsurerDto {
    InsurerDto {
        id: insurer.id,
        name: insurer.name,
        tax_id: insurer.tax_id,
        contact: insurer.contact,
        contracts: contracts.into_iter().map(ContractDto::from).collect(),
    }
}
