use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        hierarchy::{ProjectDto, ProjectInputDto},
        report::ProgressDto,
    },
    server::{
        data::{
            project::{ProjectFields, ProjectRepository},
            subprocess::SubprocessRepository,
        },
        error::{store::StoreError, Error},
        model::selection::SelectionContext,
        service::cache::DatasetCache,
        util::{progress::progress_for, validation::require_non_blank},
    },
};

const ENTITY: &str = "project";

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> ProjectService<'a> {
    /// Creates a new instance of [`ProjectService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Creates a project under an existing subprocess
    ///
    /// The project's process is taken from the subprocess.
    pub async fn create(&self, input: ProjectInputDto) -> Result<ProjectDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;
        let responsible = require_non_blank("responsable", &input.responsible)?;

        let txn = self.db.begin().await?;
        let Some(subprocess) = SubprocessRepository::new(&txn)
            .get_by_id(input.subprocess_id)
            .await?
        else {
            return Err(StoreError::ParentNotFound {
                entity: "subprocess",
                id: input.subprocess_id,
            }
            .into());
        };

        let project = ProjectRepository::new(&txn)
            .create(ProjectFields {
                name,
                responsible,
                status: input.status.label().to_string(),
                process_id: subprocess.process_id,
                subprocess_id: subprocess.id,
                projected_date: input.projected_date,
                completion_date: input.completion_date,
            })
            .await?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!(
            "Created project {} {:?} under subprocess {}",
            project.id,
            project.name,
            project.subprocess_id
        );

        Ok(project.into())
    }

    pub async fn get(&self, project_id: i32) -> Result<ProjectDto, Error> {
        ProjectRepository::new(self.db)
            .get_by_id(project_id)
            .await?
            .map(ProjectDto::from)
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: ENTITY,
                    id: project_id,
                }
                .into()
            })
    }

    /// Lists projects matching the selected process and subprocess
    pub async fn list(&self, selection: &SelectionContext) -> Result<Vec<ProjectDto>, Error> {
        let dataset = self.cache.get(self.db).await?;

        Ok(dataset
            .projects
            .iter()
            .filter(|p| selection.process_id.is_none_or(|id| p.process_id == id))
            .filter(|p| selection.subprocess_id.is_none_or(|id| p.subprocess_id == id))
            .cloned()
            .map(ProjectDto::from)
            .collect())
    }

    /// Replaces every writable field of a project
    pub async fn update(
        &self,
        project_id: i32,
        input: ProjectInputDto,
    ) -> Result<ProjectDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;
        let responsible = require_non_blank("responsable", &input.responsible)?;

        let txn = self.db.begin().await?;
        let Some(subprocess) = SubprocessRepository::new(&txn)
            .get_by_id(input.subprocess_id)
            .await?
        else {
            return Err(StoreError::ParentNotFound {
                entity: "subprocess",
                id: input.subprocess_id,
            }
            .into());
        };

        let project = ProjectRepository::new(&txn)
            .update(
                project_id,
                ProjectFields {
                    name,
                    responsible,
                    status: input.status.label().to_string(),
                    process_id: subprocess.process_id,
                    subprocess_id: subprocess.id,
                    projected_date: input.projected_date,
                    completion_date: input.completion_date,
                },
            )
            .await?
            .ok_or(StoreError::NotFound {
                entity: ENTITY,
                id: project_id,
            })?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Updated project {} {:?}", project.id, project.name);

        Ok(project.into())
    }

    /// Task-state counts and completion percentage of one project
    pub async fn progress(&self, project_id: i32) -> Result<ProgressDto, Error> {
        let dataset = self.cache.get(self.db).await?;
        let project = dataset.project(project_id).ok_or(StoreError::NotFound {
            entity: ENTITY,
            id: project_id,
        })?;

        Ok(progress_for(project, &dataset.tasks))
    }
}
