use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn hierarchy(&self) -> HierarchyFixtures<'_> {
        HierarchyFixtures { context: self }
    }
}

pub struct HierarchyFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> HierarchyFixtures<'a> {
    pub async fn insert_process(&self, name: &str) -> Result<entity::process::Model, TestError> {
        Ok(
            entity::prelude::Process::insert(entity::process::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_subprocess(
        &self,
        process_id: i32,
        name: &str,
    ) -> Result<entity::subprocess::Model, TestError> {
        Ok(
            entity::prelude::Subprocess::insert(entity::subprocess::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                process_id: ActiveValue::Set(process_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a project under `subprocess`, inheriting its process
    pub async fn insert_project(
        &self,
        subprocess: &entity::subprocess::Model,
        name: &str,
        status: &str,
    ) -> Result<entity::project::Model, TestError> {
        Ok(
            entity::prelude::Project::insert(entity::project::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                responsible: ActiveValue::Set("Test Owner".to_string()),
                status: ActiveValue::Set(status.to_string()),
                process_id: ActiveValue::Set(subprocess.process_id),
                subprocess_id: ActiveValue::Set(subprocess.id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                projected_date: ActiveValue::Set(factory::date(2025, 6, 30)),
                completion_date: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_task(
        &self,
        project_id: i32,
        status: &str,
    ) -> Result<entity::task::Model, TestError> {
        self.insert_task_with_dates(
            project_id,
            status,
            factory::date(2025, 1, 31),
            factory::date(2025, 1, 31),
        )
        .await
    }

    /// Insert a task with explicit end and projected dates
    pub async fn insert_task_with_dates(
        &self,
        project_id: i32,
        status: &str,
        end_date: NaiveDate,
        projected_date: NaiveDate,
    ) -> Result<entity::task::Model, TestError> {
        Ok(
            entity::prelude::Task::insert(entity::task::ActiveModel {
                project_id: ActiveValue::Set(project_id),
                description: ActiveValue::Set("Test task".to_string()),
                responsible: ActiveValue::Set("Test Owner".to_string()),
                start_date: ActiveValue::Set(factory::date(2025, 1, 1)),
                end_date: ActiveValue::Set(end_date),
                status: ActiveValue::Set(status.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                projected_date: ActiveValue::Set(projected_date),
                fulfillment_date: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a process with one subprocess and one pending project
    pub async fn insert_hierarchy(
        &self,
        process_name: &str,
        subprocess_name: &str,
        project_name: &str,
    ) -> Result<
        (
            entity::process::Model,
            entity::subprocess::Model,
            entity::project::Model,
        ),
        TestError,
    > {
        let process = self.insert_process(process_name).await?;
        let subprocess = self.insert_subprocess(process.id, subprocess_name).await?;
        let project = self
            .insert_project(&subprocess, project_name, "Pendiente")
            .await?;

        Ok((process, subprocess, project))
    }
}
