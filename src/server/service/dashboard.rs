//! Hierarchy view for a selection context.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        hierarchy::{ProcessDto, ProjectDto, SubprocessDto, TaskDto},
        report::DashboardDto,
    },
    server::{
        error::Error, model::selection::SelectionContext, service::cache::DatasetCache,
        util::progress::progress_for,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Builds the view for a selection after pruning stale references
    ///
    /// Each level lists the children of the level above it and is empty while that level
    /// is unselected. Progress is present only when a project is selected.
    pub async fn view(&self, selection: &SelectionContext) -> Result<DashboardDto, Error> {
        let dataset = self.cache.get(self.db).await?;
        let resolved = selection.resolve(&dataset);

        if resolved != *selection {
            tracing::debug!(
                "Pruned selection {:?} to {:?}",
                selection,
                resolved
            );
        }

        let subprocesses = match resolved.process_id {
            Some(process_id) => dataset
                .subprocesses
                .iter()
                .filter(|s| s.process_id == process_id)
                .cloned()
                .map(SubprocessDto::from)
                .collect(),
            None => Vec::new(),
        };

        let projects = match resolved.subprocess_id {
            Some(subprocess_id) => dataset
                .projects
                .iter()
                .filter(|p| p.subprocess_id == subprocess_id)
                .cloned()
                .map(ProjectDto::from)
                .collect(),
            None => Vec::new(),
        };

        let project = resolved.project_id.and_then(|id| dataset.project(id));
        let tasks = match project {
            Some(project) => dataset
                .tasks
                .iter()
                .filter(|t| t.project_id == project.id)
                .cloned()
                .map(TaskDto::from)
                .collect(),
            None => Vec::new(),
        };

        Ok(DashboardDto {
            selection: resolved.into(),
            processes: dataset
                .processes
                .iter()
                .cloned()
                .map(ProcessDto::from)
                .collect(),
            subprocesses,
            projects,
            tasks,
            progress: project.map(|project| progress_for(project, &dataset.tasks)),
        })
    }
}
