use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::ProjectModel;

/// Writable project columns.
///
/// `process_id` must be the owning subprocess's process; services derive it rather than
/// accept it from callers.
pub struct ProjectFields {
    pub name: String,
    pub responsible: String,
    pub status: String,
    pub process_id: i32,
    pub subprocess_id: i32,
    pub projected_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
}

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: ProjectFields) -> Result<ProjectModel, DbErr> {
        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(fields.name),
            responsible: ActiveValue::Set(fields.responsible),
            status: ActiveValue::Set(fields.status),
            process_id: ActiveValue::Set(fields.process_id),
            subprocess_id: ActiveValue::Set(fields.subprocess_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            projected_date: ActiveValue::Set(fields.projected_date),
            completion_date: ActiveValue::Set(fields.completion_date),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn get_by_id(&self, project_id: i32) -> Result<Option<ProjectModel>, DbErr> {
        entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await
    }

    /// Gets all projects, most recently created first
    pub async fn get_all(&self) -> Result<Vec<ProjectModel>, DbErr> {
        entity::prelude::Project::find()
            .order_by_desc(entity::project::Column::CreatedAt)
            .order_by_desc(entity::project::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of projects owned by a process, either directly through `proceso_id`
    /// or through any of the provided subprocesses
    pub async fn get_ids_by_owner(
        &self,
        process_id: Option<i32>,
        subprocess_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if process_id.is_none() && subprocess_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut condition = Condition::any();
        if let Some(process_id) = process_id {
            condition = condition.add(entity::project::Column::ProcessId.eq(process_id));
        }
        if !subprocess_ids.is_empty() {
            condition = condition.add(
                entity::project::Column::SubprocessId.is_in(subprocess_ids.iter().copied()),
            );
        }

        entity::prelude::Project::find()
            .select_only()
            .column(entity::project::Column::Id)
            .filter(condition)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Replaces every writable field of a project
    ///
    /// Returns `Ok(None)` if the project does not exist.
    pub async fn update(
        &self,
        project_id: i32,
        fields: ProjectFields,
    ) -> Result<Option<ProjectModel>, DbErr> {
        let project = match entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await?
        {
            Some(project) => project,
            None => return Ok(None),
        };

        let mut project_am = project.into_active_model();
        project_am.name = ActiveValue::Set(fields.name);
        project_am.responsible = ActiveValue::Set(fields.responsible);
        project_am.status = ActiveValue::Set(fields.status);
        project_am.process_id = ActiveValue::Set(fields.process_id);
        project_am.subprocess_id = ActiveValue::Set(fields.subprocess_id);
        project_am.projected_date = ActiveValue::Set(fields.projected_date);
        project_am.completion_date = ActiveValue::Set(fields.completion_date);

        let project = project_am.update(self.db).await?;

        Ok(Some(project))
    }

    /// Points every project of a subprocess at a new process
    ///
    /// Keeps `proceso_id` consistent when a subprocess moves to another process.
    pub async fn reassign_process(
        &self,
        subprocess_id: i32,
        process_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Project::update_many()
            .col_expr(entity::project::Column::ProcessId, Expr::value(process_id))
            .filter(entity::project::Column::SubprocessId.eq(subprocess_id))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }

    /// Deletes every project with an ID in `project_ids`
    pub async fn delete_many(&self, project_ids: &[i32]) -> Result<u64, DbErr> {
        if project_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Project::delete_many()
            .filter(entity::project::Column::Id.is_in(project_ids.iter().copied()))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use clinitrack_test_utils::prelude::*;

        use crate::server::data::project::{ProjectFields, ProjectRepository};

        /// Expect every submitted field to be stored
        #[tokio::test]
        async fn creates_project_with_all_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            let process = test.hierarchy().insert_process("Admissions").await?;
            let subprocess = test
                .hierarchy()
                .insert_subprocess(process.id, "Intake")
                .await?;

            let project_repo = ProjectRepository::new(&test.db);
            let project = project_repo
                .create(ProjectFields {
                    name: "Q1 Rollout".to_string(),
                    responsible: "Dr. Rojas".to_string(),
                    status: "En curso".to_string(),
                    process_id: process.id,
                    subprocess_id: subprocess.id,
                    projected_date: factory::date(2025, 3, 31),
                    completion_date: None,
                })
                .await?;

            let stored = project_repo
                .get_by_id(project.id)
                .await?
                .expect("project should exist");
            assert_eq!(stored.name, "Q1 Rollout");
            assert_eq!(stored.responsible, "Dr. Rojas");
            assert_eq!(stored.status, "En curso");
            assert_eq!(stored.subprocess_id, subprocess.id);
            assert_eq!(stored.projected_date, factory::date(2025, 3, 31));
            assert_eq!(stored.completion_date, None);

            Ok(())
        }
    }

    mod get_ids_by_owner {
        use clinitrack_test_utils::prelude::*;

        use crate::server::data::project::ProjectRepository;

        /// Expect projects matched through either the process or its subprocesses
        #[tokio::test]
        async fn matches_process_or_subprocesses() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            let (process, subprocess, project) = test
                .hierarchy()
                .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
                .await?;
            let (_, _, other_project) = test
                .hierarchy()
                .insert_hierarchy("Billing", "Invoicing", "Audit")
                .await?;

            let project_repo = ProjectRepository::new(&test.db);
            let by_process = project_repo.get_ids_by_owner(Some(process.id), &[]).await?;
            let by_subprocess = project_repo
                .get_ids_by_owner(None, &[subprocess.id])
                .await?;

            assert_eq!(by_process, vec![project.id]);
            assert_eq!(by_subprocess, vec![project.id]);
            assert!(!by_process.contains(&other_project.id));

            Ok(())
        }

        /// Expect no IDs when no owner is provided
        #[tokio::test]
        async fn returns_empty_without_owner() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            test.hierarchy()
                .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
                .await?;

            let project_repo = ProjectRepository::new(&test.db);
            let ids = project_repo.get_ids_by_owner(None, &[]).await?;

            assert!(ids.is_empty());

            Ok(())
        }
    }

    mod reassign_process {
        use clinitrack_test_utils::prelude::*;

        use crate::server::data::project::ProjectRepository;

        /// Expect projects of the subprocess to follow it to the new process
        #[tokio::test]
        async fn moves_projects_to_new_process() -> Result<(), TestError> {
            let test = TestBuilder::new().with_hierarchy_tables().build().await?;
            let (_, subprocess, project) = test
                .hierarchy()
                .insert_hierarchy("Admissions", "Intake", "Q1 Rollout")
                .await?;
            let billing = test.hierarchy().insert_process("Billing").await?;

            let project_repo = ProjectRepository::new(&test.db);
            let result = project_repo
                .reassign_process(subprocess.id, billing.id)
                .await?;

            assert_eq!(result, 1);
            let moved = project_repo
                .get_by_id(project.id)
                .await?
                .expect("project should exist");
            assert_eq!(moved.process_id, billing.id);

            Ok(())
        }
    }
}
