use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::hierarchy::{SubprocessDto, SubprocessInputDto},
    server::{
        data::{
            process::ProcessRepository, project::ProjectRepository,
            subprocess::SubprocessRepository,
        },
        error::{store::StoreError, Error},
        model::selection::SelectionContext,
        service::cache::DatasetCache,
        util::validation::require_non_blank,
    },
};

const ENTITY: &str = "subprocess";

pub struct SubprocessService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> SubprocessService<'a> {
    /// Creates a new instance of [`SubprocessService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Creates a subprocess under an existing process
    pub async fn create(&self, input: SubprocessInputDto) -> Result<SubprocessDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;

        let txn = self.db.begin().await?;
        if ProcessRepository::new(&txn)
            .get_by_id(input.process_id)
            .await?
            .is_none()
        {
            return Err(StoreError::ParentNotFound {
                entity: "process",
                id: input.process_id,
            }
            .into());
        }

        let subprocess = SubprocessRepository::new(&txn)
            .create(name, input.process_id)
            .await?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!(
            "Created subprocess {} {:?} under process {}",
            subprocess.id,
            subprocess.name,
            subprocess.process_id
        );

        Ok(subprocess.into())
    }

    pub async fn get(&self, subprocess_id: i32) -> Result<SubprocessDto, Error> {
        SubprocessRepository::new(self.db)
            .get_by_id(subprocess_id)
            .await?
            .map(SubprocessDto::from)
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: ENTITY,
                    id: subprocess_id,
                }
                .into()
            })
    }

    /// Lists subprocesses, restricted to the selected process when one is given
    ///
    /// A selected process that no longer exists yields an empty list.
    pub async fn list(&self, selection: &SelectionContext) -> Result<Vec<SubprocessDto>, Error> {
        let dataset = self.cache.get(self.db).await?;

        Ok(dataset
            .subprocesses
            .iter()
            .filter(|s| selection.process_id.is_none_or(|p| s.process_id == p))
            .cloned()
            .map(SubprocessDto::from)
            .collect())
    }

    /// Replaces the name and owning process of a subprocess
    ///
    /// Projects under the subprocess follow it to the new process.
    pub async fn update(
        &self,
        subprocess_id: i32,
        input: SubprocessInputDto,
    ) -> Result<SubprocessDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;

        let txn = self.db.begin().await?;
        let subprocess_repo = SubprocessRepository::new(&txn);
        let Some(existing) = subprocess_repo.get_by_id(subprocess_id).await? else {
            return Err(StoreError::NotFound {
                entity: ENTITY,
                id: subprocess_id,
            }
            .into());
        };
        if ProcessRepository::new(&txn)
            .get_by_id(input.process_id)
            .await?
            .is_none()
        {
            return Err(StoreError::ParentNotFound {
                entity: "process",
                id: input.process_id,
            }
            .into());
        }

        let subprocess = subprocess_repo
            .update(subprocess_id, name, input.process_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Subprocess {} vanished during its own update transaction",
                    subprocess_id
                ))
            })?;
        if existing.process_id != subprocess.process_id {
            let moved = ProjectRepository::new(&txn)
                .reassign_process(subprocess.id, subprocess.process_id)
                .await?;
            tracing::debug!(
                "Moved {} projects of subprocess {} to process {}",
                moved,
                subprocess.id,
                subprocess.process_id
            );
        }
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Updated subprocess {} {:?}", subprocess.id, subprocess.name);

        Ok(subprocess.into())
    }
}
