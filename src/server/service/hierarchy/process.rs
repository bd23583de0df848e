use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::hierarchy::{
        ProcessDto, ProcessInputDto, ProcessWithSubprocessDto, ProcessWithSubprocessInputDto,
    },
    server::{
        data::{process::ProcessRepository, subprocess::SubprocessRepository},
        error::{store::StoreError, Error},
        service::cache::DatasetCache,
        util::validation::require_non_blank,
    },
};

const ENTITY: &str = "process";

pub struct ProcessService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> ProcessService<'a> {
    /// Creates a new instance of [`ProcessService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Creates a process
    ///
    /// # Returns
    /// - `Ok(ProcessDto)` - The stored process
    /// - `Err(Error::StoreError)` - Blank name, or the name is already taken
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create(&self, input: ProcessInputDto) -> Result<ProcessDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;

        let txn = self.db.begin().await?;
        let process = ProcessRepository::new(&txn)
            .create(name.clone())
            .await
            .map_err(|e| StoreError::from_unique_violation(e, ENTITY, &name))?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Created process {} {:?}", process.id, process.name);

        Ok(process.into())
    }

    /// Creates a process and its first subprocess in one transaction
    ///
    /// Neither row is written if either fails validation or the process name is taken.
    pub async fn create_with_subprocess(
        &self,
        input: ProcessWithSubprocessInputDto,
    ) -> Result<ProcessWithSubprocessDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;
        let subprocess_name = require_non_blank("subproceso", &input.subprocess_name)?;

        let txn = self.db.begin().await?;
        let process = ProcessRepository::new(&txn)
            .create(name.clone())
            .await
            .map_err(|e| StoreError::from_unique_violation(e, ENTITY, &name))?;
        let subprocess = SubprocessRepository::new(&txn)
            .create(subprocess_name, process.id)
            .await?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!(
            "Created process {} {:?} with subprocess {} {:?}",
            process.id,
            process.name,
            subprocess.id,
            subprocess.name
        );

        Ok(ProcessWithSubprocessDto {
            process: process.into(),
            subprocess: subprocess.into(),
        })
    }

    pub async fn get(&self, process_id: i32) -> Result<ProcessDto, Error> {
        ProcessRepository::new(self.db)
            .get_by_id(process_id)
            .await?
            .map(ProcessDto::from)
            .ok_or_else(|| {
                StoreError::NotFound {
                    entity: ENTITY,
                    id: process_id,
                }
                .into()
            })
    }

    /// Lists every process, most recently created first
    pub async fn list(&self) -> Result<Vec<ProcessDto>, Error> {
        let dataset = self.cache.get(self.db).await?;

        Ok(dataset
            .processes
            .iter()
            .cloned()
            .map(ProcessDto::from)
            .collect())
    }

    /// Renames a process
    pub async fn update(
        &self,
        process_id: i32,
        input: ProcessInputDto,
    ) -> Result<ProcessDto, Error> {
        let name = require_non_blank("nombre", &input.name)?;

        let txn = self.db.begin().await?;
        let process = ProcessRepository::new(&txn)
            .update(process_id, name.clone())
            .await
            .map_err(|e| StoreError::from_unique_violation(e, ENTITY, &name))?
            .ok_or(StoreError::NotFound {
                entity: ENTITY,
                id: process_id,
            })?;
        txn.commit().await?;
        self.cache.invalidate().await;

        tracing::info!("Updated process {} {:?}", process.id, process.name);

        Ok(process.into())
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use clinitrack_test_utils::prelude::*;

        use crate::{
            model::hierarchy::ProcessInputDto,
            server::{
                error::{store::StoreError, Error},
                service::{cache::DatasetCache, hierarchy::process::ProcessService},
            },
        };

        /// Expect Conflict for a duplicate name with exactly one row remaining
        #[tokio::test]
        async fn conflicts_on_duplicate_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let cache = DatasetCache::new();
            let service = ProcessService::new(&test.db, &cache);

            service
                .create(ProcessInputDto {
                    name: "Admissions".to_string(),
                })
                .await
                .unwrap();
            let result = service
                .create(ProcessInputDto {
                    name: "Admissions".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::StoreError(StoreError::Conflict { .. }))
            ));
            let processes = service.list().await.unwrap();
            assert_eq!(processes.len(), 1);
            assert_eq!(processes[0].name, "Admissions");

            Ok(())
        }

        /// Expect Validation error and no write for a blank name
        #[tokio::test]
        async fn rejects_blank_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let cache = DatasetCache::new();
            let service = ProcessService::new(&test.db, &cache);

            let result = service
                .create(ProcessInputDto {
                    name: "   ".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::StoreError(StoreError::Validation { .. }))
            ));
            assert!(service.list().await.unwrap().is_empty());

            Ok(())
        }

        /// Expect a cached list to reflect a create made after it was loaded
        #[tokio::test]
        async fn invalidates_cached_list() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let cache = DatasetCache::new();
            let service = ProcessService::new(&test.db, &cache);

            assert!(service.list().await.unwrap().is_empty());
            let created = service
                .create(ProcessInputDto {
                    name: "Admissions".to_string(),
                })
                .await
                .unwrap();

            let processes = service.list().await.unwrap();
            assert_eq!(processes.len(), 1);
            assert_eq!(processes[0].id, created.id);

            Ok(())
        }
    }

    mod create_with_subprocess {
        use clinitrack_test_utils::prelude::*;

        use crate::{
            model::hierarchy::ProcessWithSubprocessInputDto,
            server::{
                data::subprocess::SubprocessRepository,
                service::{cache::DatasetCache, hierarchy::process::ProcessService},
            },
        };

        /// Expect both rows written and linked
        #[tokio::test]
        async fn creates_both_rows() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let cache = DatasetCache::new();
            let service = ProcessService::new(&test.db, &cache);

            let created = service
                .create_with_subprocess(ProcessWithSubprocessInputDto {
                    name: "Admissions".to_string(),
                    subprocess_name: "Intake".to_string(),
                })
                .await
                .unwrap();

            assert_eq!(created.subprocess.process_id, created.process.id);
            assert_eq!(created.subprocess.name, "Intake");

            Ok(())
        }

        /// Expect no subprocess when the process name conflicts
        #[tokio::test]
        async fn writes_nothing_on_conflict() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            test.hierarchy().insert_process("Admissions").await?;
            let cache = DatasetCache::new();
            let service = ProcessService::new(&test.db, &cache);

            let result = service
                .create_with_subprocess(ProcessWithSubprocessInputDto {
                    name: "Admissions".to_string(),
                    subprocess_name: "Intake".to_string(),
                })
                .await;

            assert!(result.is_err());
            assert!(SubprocessRepository::new(&test.db).get_all().await?.is_empty());

            Ok(())
        }
    }

    mod update {
        use clinitrack_test_utils::prelude::*;

        use crate::{
            model::hierarchy::ProcessInputDto,
            server::{
                error::{store::StoreError, Error},
                service::{cache::DatasetCache, hierarchy::process::ProcessService},
            },
        };

        /// Expect NotFound for a nonexistent process
        #[tokio::test]
        async fn not_found_for_missing_process() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            let cache = DatasetCache::new();
            let service = ProcessService::new(&test.db, &cache);

            let result = service
                .update(
                    7,
                    ProcessInputDto {
                        name: "Billing".to_string(),
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::StoreError(StoreError::NotFound { id: 7, .. }))
            ));

            Ok(())
        }

        /// Expect Conflict when renaming onto another process's name
        #[tokio::test]
        async fn conflicts_when_renaming_onto_existing_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_migrations().build().await?;
            test.hierarchy().insert_process("Admissions").await?;
            let billing = test.hierarchy().insert_process("Billing").await?;
            let cache = DatasetCache::new();
            let service = ProcessService::new(&test.db, &cache);

            let result = service
                .update(
                    billing.id,
                    ProcessInputDto {
                        name: "Admissions".to_string(),
                    },
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::StoreError(StoreError::Conflict { .. }))
            ));
            assert_eq!(service.get(billing.id).await.unwrap().name, "Billing");

            Ok(())
        }
    }
}
