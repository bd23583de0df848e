use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::TaskModel;

/// Writable task columns.
pub struct TaskFields {
    pub project_id: i32,
    pub description: String,
    pub responsible: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub projected_date: NaiveDate,
    pub fulfillment_date: Option<NaiveDate>,
}

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new instance of [`TaskRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: TaskFields) -> Result<TaskModel, DbErr> {
        let task = entity::task::ActiveModel {
            project_id: ActiveValue::Set(fields.project_id),
            description: ActiveValue::Set(fields.description),
            responsible: ActiveValue::Set(fields.responsible),
            start_date: ActiveValue::Set(fields.start_date),
            end_date: ActiveValue::Set(fields.end_date),
            status: ActiveValue::Set(fields.status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            projected_date: ActiveValue::Set(fields.projected_date),
            fulfillment_date: ActiveValue::Set(fields.fulfillment_date),
            ..Default::default()
        };

        task.insert(self.db).await
    }

    pub async fn get_by_id(&self, task_id: i32) -> Result<Option<TaskModel>, DbErr> {
        entity::prelude::Task::find_by_id(task_id).one(self.db).await
    }

    /// Gets all tasks, most recently created first
    pub async fn get_all(&self) -> Result<Vec<TaskModel>, DbErr> {
        entity::prelude::Task::find()
            .order_by_desc(entity::task::Column::CreatedAt)
            .order_by_desc(entity::task::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every writable field of a task
    ///
    /// Returns `Ok(None)` if the task does not exist.
    pub async fn update(
        &self,
        task_id: i32,
        fields: TaskFields,
    ) -> Result<Option<TaskModel>, DbErr> {
        let task = match entity::prelude::Task::find_by_id(task_id)
            .one(self.db)
            .await?
        {
            Some(task) => task,
            None => return Ok(None),
        };

        let mut task_am = task.into_active_model();
        task_am.project_id = ActiveValue::Set(fields.project_id);
        task_am.description = ActiveValue::Set(fields.description);
        task_am.responsible = ActiveValue::Set(fields.responsible);
        task_am.start_date = ActiveValue::Set(fields.start_date);
        task_am.end_date = ActiveValue::Set(fields.end_date);
        task_am.status = ActiveValue::Set(fields.status);
        task_am.projected_date = ActiveValue::Set(fields.projected_date);
        task_am.fulfillment_date = ActiveValue::Set(fields.fulfillment_date);

        let task = task_am.update(self.db).await?;

        Ok(Some(task))
    }

    /// Deletes a single task
    pub async fn delete(&self, task_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Task::delete_by_id(task_id)
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }

    /// Deletes every task belonging to any of the provided projects
    pub async fn delete_by_project_ids(&self, project_ids: &[i32]) -> Result<u64, DbErr> {
        if project_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Task::delete_many()
            .filter(entity::task::Column::ProjectId.is_in(project_ids.iter().copied()))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }
}
