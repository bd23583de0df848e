use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::SubprocessModel;

pub struct SubprocessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubprocessRepository<'a, C> {
    /// Creates a new instance of [`SubprocessRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new subprocess under the provided process
    ///
    /// # Arguments
    /// - `name` (`String`): Name of the subprocess, not required to be unique
    /// - `process_id` (`i32`): ID of the owning process, a foreign key violation is
    ///   returned if it does not exist
    pub async fn create(&self, name: String, process_id: i32) -> Result<SubprocessModel, DbErr> {
        let subprocess = entity::subprocess::ActiveModel {
            name: ActiveValue::Set(name),
            process_id: ActiveValue::Set(process_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        subprocess.insert(self.db).await
    }

    pub async fn get_by_id(&self, subprocess_id: i32) -> Result<Option<SubprocessModel>, DbErr> {
        entity::prelude::Subprocess::find_by_id(subprocess_id)
            .one(self.db)
            .await
    }

    /// Gets all subprocesses, most recently created first
    pub async fn get_all(&self) -> Result<Vec<SubprocessModel>, DbErr> {
        entity::prelude::Subprocess::find()
            .order_by_desc(entity::subprocess::Column::CreatedAt)
            .order_by_desc(entity::subprocess::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of every subprocess owned by the provided process
    pub async fn get_ids_by_process_id(&self, process_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Subprocess::find()
            .select_only()
            .column(entity::subprocess::Column::Id)
            .filter(entity::subprocess::Column::ProcessId.eq(process_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Replaces the name and owning process of a subprocess
    ///
    /// Returns `Ok(None)` if the subprocess does not exist.
    pub async fn update(
        &self,
        subprocess_id: i32,
        name: String,
        process_id: i32,
    ) -> Result<Option<SubprocessModel>, DbErr> {
        let subprocess = match entity::prelude::Subprocess::find_by_id(subprocess_id)
            .one(self.db)
            .await?
        {
            Some(subprocess) => subprocess,
            None => return Ok(None),
        };

        let mut subprocess_am = subprocess.into_active_model();
        subprocess_am.name = ActiveValue::Set(name);
        subprocess_am.process_id = ActiveValue::Set(process_id);

        let subprocess = subprocess_am.update(self.db).await?;

        Ok(Some(subprocess))
    }

    /// Deletes every subprocess with an ID in `subprocess_ids`
    pub async fn delete_many(&self, subprocess_ids: &[i32]) -> Result<u64, DbErr> {
        if subprocess_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Subprocess::delete_many()
            .filter(entity::subprocess::Column::Id.is_in(subprocess_ids.iter().copied()))
            .exec(self.db)
            .await
            .map(|result| result.rows_affected)
    }
}
