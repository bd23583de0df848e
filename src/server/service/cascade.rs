//! Transitive deletion across the ownership graph.
//!
//! Children are removed before their parents inside a single transaction, so a failure at
//! any level leaves every table untouched. The schema's `ON DELETE CASCADE` keys would
//! remove the same rows; deleting explicitly lets the report count them.

use std::fmt;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::hierarchy::DeleteReportDto,
    server::{
        data::{
            contract::ContractRepository, insurer::InsurerRepository, process::ProcessRepository,
            project::ProjectRepository, subprocess::SubprocessRepository, task::TaskRepository,
        },
        error::Error,
        service::cache::DatasetCache,
    },
};

/// Kind of record a cascade delete starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Process,
    Subprocess,
    Project,
    Task,
    Insurer,
    Contract,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Process => "process",
            Self::Subprocess => "subprocess",
            Self::Project => "project",
            Self::Task => "task",
            Self::Insurer => "insurer",
            Self::Contract => "contract",
        })
    }
}

pub struct CascadeService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> CascadeService<'a> {
    /// Creates a new instance of [`CascadeService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Deletes a record and every record it transitively owns
    ///
    /// Deleting an ID that does not exist succeeds with an empty report.
    ///
    /// # Returns
    /// - `Ok(DeleteReportDto)` - Rows removed per table
    /// - `Err(Error::DbErr)` - The transaction failed and nothing was removed
    pub async fn delete(&self, kind: EntityKind, id: i32) -> Result<DeleteReportDto, Error> {
        let txn = self.db.begin().await?;

        let report = match kind {
            EntityKind::Process => delete_process(&txn, id).await?,
            EntityKind::Subprocess => delete_subprocess(&txn, id).await?,
            EntityKind::Project => delete_project(&txn, id).await?,
            EntityKind::Task => DeleteReportDto {
                tasks: TaskRepository::new(&txn).delete(id).await?,
                ..Default::default()
            },
            EntityKind::Insurer => delete_insurer(&txn, id).await?,
            EntityKind::Contract => DeleteReportDto {
                contracts: ContractRepository::new(&txn).delete(id).await?,
                ..Default::default()
            },
        };

        txn.commit().await?;

        if report.is_empty() {
            tracing::debug!("No {} with ID {} to delete", kind, id);
            return Ok(report);
        }

        self.cache.invalidate().await;
        tracing::info!(
            "Deleted {} {} and {} owned rows",
            kind,
            id,
            report.total() - 1
        );

        Ok(report)
    }
}

async fn delete_process<C: ConnectionTrait>(
    db: &C,
    process_id: i32,
) -> Result<DeleteReportDto, Error> {
    let process_repo = ProcessRepository::new(db);
    if process_repo.get_by_id(process_id).await?.is_none() {
        return Ok(DeleteReportDto::default());
    }

    let subprocess_repo = SubprocessRepository::new(db);
    let project_repo = ProjectRepository::new(db);

    let subprocess_ids = subprocess_repo.get_ids_by_process_id(process_id).await?;
    let project_ids = project_repo
        .get_ids_by_owner(Some(process_id), &subprocess_ids)
        .await?;

    Ok(DeleteReportDto {
        tasks: TaskRepository::new(db)
            .delete_by_project_ids(&project_ids)
            .await?,
        projects: project_repo.delete_many(&project_ids).await?,
        subprocesses: subprocess_repo
            .delete_many(&subprocess_ids)
            .await?,
        processes: process_repo.delete(process_id).await?,
        ..Default::default()
    })
}

async fn delete_subprocess<C: ConnectionTrait>(
    db: &C,
    subprocess_id: i32,
) -> Result<DeleteReportDto, Error> {
    let subprocess_repo = SubprocessRepository::new(db);
    if subprocess_repo.get_by_id(subprocess_id).await?.is_none() {
        return Ok(DeleteReportDto::default());
    }

    let project_repo = ProjectRepository::new(db);
    let project_ids = project_repo
        .get_ids_by_owner(None, &[subprocess_id])
        .await?;

    Ok(DeleteReportDto {
        tasks: TaskRepository::new(db)
            .delete_by_project_ids(&project_ids)
            .await?,
        projects: project_repo.delete_many(&project_ids).await?,
        subprocesses: subprocess_repo
            .delete_many(&[subprocess_id])
            .await?,
        ..Default::default()
    })
}

async fn delete_project<C: ConnectionTrait>(
    db: &C,
    project_id: i32,
) -> Result<DeleteReportDto, Error> {
    let project_repo = ProjectRepository::new(db);
    if project_repo.get_by_id(project_id).await?.is_none() {
        return Ok(DeleteReportDto::default());
    }

    Ok(DeleteReportDto {
        tasks: TaskRepository::new(db)
            .delete_by_project_ids(&[project_id])
            .await?,
        projects: project_repo.delete_many(&[project_id]).await?,
        ..Default::default()
    })
}

async fn delete_insurer<C: ConnectionTrait>(
    db: &C,
    insurer_id: i32,
) -> Result<DeleteReportDto, Error> {
    let insurer_repo = InsurerRepository::new(db);
    if insurer_repo.get_by_id(insurer_id).await?.is_none() {
        return Ok(DeleteReportDto::default());
    }

    Ok(DeleteReportDto {
        contracts: ContractRepository::new(db)
            .delete_by_insurer_id(insurer_id)
            .await?,
        insurers: insurer_repo.delete(insurer_id).await?,
        ..Default::default()
    })
}
