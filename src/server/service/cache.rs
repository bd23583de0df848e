//! Read-through cache of the loaded dataset.
//!
//! Every read of hierarchy or insurer rows for listing and reporting goes through
//! [`DatasetCache::get`]. Every committed write calls [`DatasetCache::invalidate`] before
//! returning, so the next read reloads from the database.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use sea_orm::ConnectionTrait;
use tokio::sync::RwLock;

use crate::server::{
    data::{
        contract::ContractRepository, insurer::InsurerRepository, process::ProcessRepository,
        project::ProjectRepository, subprocess::SubprocessRepository, task::TaskRepository,
    },
    error::Error,
    model::db::{
        ContractModel, InsurerModel, ProcessModel, ProjectModel, SubprocessModel, TaskModel,
    },
};

/// Snapshot of every table, in each repository's list order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub processes: Vec<ProcessModel>,
    pub subprocesses: Vec<SubprocessModel>,
    pub projects: Vec<ProjectModel>,
    pub tasks: Vec<TaskModel>,
    pub insurers: Vec<InsurerModel>,
    pub contracts: Vec<ContractModel>,
}

impl Dataset {
    /// Loads every table.
    pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Self, Error> {
        Ok(Self {
            processes: ProcessRepository::new(db).get_all().await?,
            subprocesses: SubprocessRepository::new(db).get_all().await?,
            projects: ProjectRepository::new(db).get_all().await?,
            tasks: TaskRepository::new(db).get_all().await?,
            insurers: InsurerRepository::new(db).get_all().await?,
            contracts: ContractRepository::new(db).get_all().await?,
        })
    }

    pub fn process(&self, process_id: i32) -> Option<&ProcessModel> {
        self.processes.iter().find(|p| p.id == process_id)
    }

    pub fn subprocess(&self, subprocess_id: i32) -> Option<&SubprocessModel> {
        self.subprocesses.iter().find(|s| s.id == subprocess_id)
    }

    pub fn project(&self, project_id: i32) -> Option<&ProjectModel> {
        self.projects.iter().find(|p| p.id == project_id)
    }
}

/// Process-wide cache holding at most one loaded [`Dataset`].
///
/// A generation counter is bumped on every invalidation; a load that started before an
/// invalidation is returned to its caller but never installed.
#[derive(Debug, Default)]
pub struct DatasetCache {
    dataset: RwLock<Option<Arc<Dataset>>>,
    generation: AtomicU64,
}

impl DatasetCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached dataset, loading it on a miss.
    pub async fn get<C: ConnectionTrait>(&self, db: &C) -> Result<Arc<Dataset>, Error> {
        if let Some(dataset) = self.dataset.read().await.as_ref() {
            return Ok(dataset.clone());
        }

        let generation = self.generation.load(Ordering::Acquire);
        let dataset = Arc::new(Dataset::load(db).await?);

        let mut slot = self.dataset.write().await;
        if self.generation.load(Ordering::Acquire) == generation {
            tracing::debug!(
                "Loaded dataset with {} processes and {} insurers",
                dataset.processes.len(),
                dataset.insurers.len()
            );
            *slot = Some(dataset.clone());
        }

        Ok(dataset)
    }

    /// Drops the cached dataset. Called after every committed write.
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        *self.dataset.write().await = None;
        tracing::debug!("Dataset cache invalidated");
    }

    #[cfg(test)]
    pub(crate) async fn is_loaded(&self) -> bool {
        self.dataset.read().await.is_some()
    }
}
