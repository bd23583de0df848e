use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
};

use crate::server::model::db::ProcessModel;

pub struct ProcessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProcessRepository<'a, C> {
    /// Creates a new instance of [`ProcessRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new process
    ///
    /// Fails with a unique constraint violation if the name is already taken.
    pub async fn create(&self, name: String) -> Result<ProcessModel, DbErr> {
        let process = entity::process::ActiveModel {
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        process.insert(self.db).await
    }

    pub async fn get_by_id(&self, process_id: i32) -> Result<Option<ProcessModel>, DbErr> {
        entity::prelude::Process::find_by_id(process_id)
            .one(self.db)
            .await
    }

    /// Gets all processes, most recently created first
    pub async fn get_all(&self) -> Result<Vec<ProcessModel>, DbErr> {
        entity::prelude::Process::find()
            .order_by_desc(entity::process::Column::CreatedAt)
            .order_by_desc(entity::process::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a process
    ///
    /// Returns `Ok(None)` if the process does not exist.
    pub async fn update(
        &self,
        process_id: i32,
        name: String,
    ) -> Result<Option<ProcessModel>, DbErr> {
        let process = match entity::prelude::Process::find_by_id(process_id)
            .one(self.db)
            .await?
        {
            Some(process) => process,
            None => return Ok(None),
        };

        let mut process_am = process.into_active_model();
        process_am.name = ActiveValue::Set(name);

        let process = process_am.update(self.db).await?;

        Ok(Some(process))
    }

    /// Deletes a process row
    ///
    /// Returns the number of rows removed, `0` if the process does not exist.
    pub async fn delete(&self, process_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Process::delete_by_id(process_id)
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }
}
