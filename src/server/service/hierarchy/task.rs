use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::hierarchy::{TaskDto, TaskInputDto},
    server::{
        data::{
            project::ProjectRepository,
            task::{TaskFields, TaskRepository},
        },
        error::{store::StoreError, Error},
        model::selection::SelectionContext,
        service::cache::DatasetCache,
        util::validation::{require_date_order, require_non_blank},
    },
};

const ENTITY: &str = "task";

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> TaskService<'a> {
    /// Creates a new instance of [`TaskService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Creates a task under an existing project
    pub async fn create(&self, input: TaskInputDto) -> Result<TaskDto, Error> {
        let fields = validate(input)?;

        let txn = self.db.begin().await?;
        if ProjectRepository::new(&txn)
            .get_by_id(fields.project_id)
            .await?
            .is_none()
        {
            return Err(StoreError::ParentNotFound {
                entity: "project",
                id: fields.project_id,
            }
            .into());
        }

        let task = TaskRepository::new(&txn).create(fields).await?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Created task {} under project {}", task.id, task.project_id);

        Ok(task.into())
    }

    pub async fn get(&self, task_id: i32) -> Result<TaskDto, Error> {
        TaskRepository::new(self.db)
            .get_by_id(task_id)
            .await?
            .map(TaskDto::from)
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: ENTITY,
                    id: task_id,
                }
                .into()
            })
    }

    /// Lists tasks of projects matching every level of the selection
    pub async fn list(&self, selection: &SelectionContext) -> Result<Vec<TaskDto>, Error> {
        let dataset = self.cache.get(self.db).await?;

        let project_ids: HashSet<i32> = dataset
            .projects
            .iter()
            .filter(|p| selection.process_id.is_none_or(|id| p.process_id == id))
            .filter(|p| selection.subprocess_id.is_none_or(|id| p.subprocess_id == id))
            .filter(|p| selection.project_id.is_none_or(|id| p.id == id))
            .map(|p| p.id)
            .collect();

        Ok(dataset
            .tasks
            .iter()
            .filter(|t| project_ids.contains(&t.project_id))
            .cloned()
            .map(TaskDto::from)
            .collect())
    }

    /// Replaces every writable field of a task
    pub async fn update(&self, task_id: i32, input: TaskInputDto) -> Result<TaskDto, Error> {
        let fields = validate(input)?;

        let txn = self.db.begin().await?;
        if ProjectRepository::new(&txn)
            .get_by_id(fields.project_id)
            .await?
            .is_none()
        {
            return Err(StoreError::ParentNotFound {
                entity: "project",
                id: fields.project_id,
            }
            .into());
        }

        let task = TaskRepository::new(&txn)
            .update(task_id, fields)
            .await?
            .ok_or(StoreError::NotFound {
                entity: ENTITY,
                id: task_id,
            })?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Updated task {}", task.id);

        Ok(task.into())
    }
}

fn validate(input: TaskInputDto) -> Result<TaskFields, StoreError> {
    let description = require_non_blank("descripcion", &input.description)?;
    let responsible = require_non_blank("responsable", &input.responsible)?;
    require_date_order("fecha_fin", input.start_date, input.end_date)?;

    Ok(TaskFields {
        project_id: input.project_id,
        description,
        responsible,
        start_date: input.start_date,
        end_date: input.end_date,
        status: input.status.label().to_string(),
        projected_date: input.projected_date,
        fulfillment_date: input.fulfillment_date,
    })
}

#[cfg(test)]
mod tests {

    mod create {
        use clinitrack_test_utils::prelude::*;

        use crate::{
            model::hierarchy::{TaskInputDto, WorkStatus},
            server::{
                error::{store::StoreError, Error},
                service::{cache::DatasetCache, hierarchy::task::TaskService},
            },
        };

        fn input(project_id: i32) -> TaskInputDto {
            TaskInputDto {
                project_id,
                description: "Train front desk".to_string(),
                responsible: "Ana".to_string(),
                start_date: factory::date(2025, 2, 1),
                end_date: factory::date(2025, 2, 10),
                status: WorkStatus::Pending,
                projected_date: factory::date(2025, 2, 7),
                fulfillment_date: None,
            }
        }

        /// Expect the stored task to carry every submitted field
        #[tokio::test]
        async fn stores_all_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let (_, _, project) = test
                .hierarchy()
                .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
                .await?;
            let cache = DatasetCache::new();
            let service = TaskService::new(&test.db, &cache);

            let created = service.create(input(project.id)).await.unwrap();
            let fetched = service.get(created.id).await.unwrap();

            assert_eq!(fetched.description, "Train front desk");
            assert_eq!(fetched.status, "Pendiente");
            assert_eq!(fetched.end_date, factory::date(2025, 2, 10));
            assert_eq!(fetched.projected_date, factory::date(2025, 2, 7));

            Ok(())
        }

        /// Expect Validation error when the end date precedes the start date
        #[tokio::test]
        async fn rejects_end_before_start() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let (_, _, project) = test
                .hierarchy()
                .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
                .await?;
            let cache = DatasetCache::new();
            let service = TaskService::new(&test.db, &cache);

            let mut bad = input(project.id);
            bad.end_date = factory::date(2025, 1, 15);
            let result = service.create(bad).await;

            assert!(matches!(
                result,
                Err(Error::StoreError(StoreError::Validation { field: "fecha_fin", .. }))
            ));

            Ok(())
        }

        /// Expect ParentNotFound for a missing project
        #[tokio::test]
        async fn rejects_missing_project() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let cache = DatasetCache::new();
            let service = TaskService::new(&test.db, &cache);

            let result = service.create(input(9)).await;

            assert!(matches!(
                result,
                Err(Error::StoreError(StoreError::ParentNotFound { .. }))
            ));

            Ok(())
        }
    }

    mod list {
        use clinitrack_test_utils::prelude::*;

        use crate::server::{
            model::selection::SelectionContext,
            service::{cache::DatasetCache, hierarchy::task::TaskService},
        };

        /// Expect tasks filtered through their project's process
        #[tokio::test]
        async fn filters_by_process_through_project() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let (admissions, _, rollout) = test
                .hierarchy()
                .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
                .await?;
            let (_, _, audit) = test
                .hierarchy()
                .insert_hierarchy("Billing", "Invoicing", "Audit")
                .await?;
            let kept = test.hierarchy().insert_task(rollout.id, "Pendiente").await?;
            test.hierarchy().insert_task(audit.id, "Pendiente").await?;
            let cache = DatasetCache::new();
            let service = TaskService::new(&test.db, &cache);

            let tasks = service
                .list(&SelectionContext {
                    process_id: Some(admissions.id),
                    ..Default::default()
                })
                .await
                .unwrap();

            assert_eq!(tasks.len(), 1);
            assert_eq!(tasks[0].id, kept.id);

            Ok(())
        }
    }
}
