//! Aggregated reports over the cached dataset.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        insurer::ContractDto,
        report::{InsurerTotalDto, ProgressDto, TaskDeviationDto},
    },
    server::{
        error::Error,
        service::cache::DatasetCache,
        util::{
            contract::{contracts_expiring, insurer_totals},
            export::progress_csv,
            progress::project_progress,
            time::{deviation_days, expiry_cutoff},
        },
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a DatasetCache,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a DatasetCache) -> Self {
        Self { db, cache }
    }

    /// Contract count and monthly cap total per insurer with at least one contract
    pub async fn insurer_totals(&self) -> Result<Vec<InsurerTotalDto>, Error> {
        let dataset = self.cache.get(self.db).await?;

        Ok(insurer_totals(&dataset.insurers, &dataset.contracts))
    }

    /// Contracts ending within `window_days` of `today`, including already expired ones
    pub async fn expiring_contracts(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Result<Vec<ContractDto>, Error> {
        let cutoff = expiry_cutoff(today, window_days)?;
        let dataset = self.cache.get(self.db).await?;

        Ok(contracts_expiring(&dataset.contracts, cutoff)
            .into_iter()
            .map(ContractDto::from)
            .collect())
    }

    /// Progress of every project, most recently created first
    pub async fn project_progress(&self) -> Result<Vec<ProgressDto>, Error> {
        let dataset = self.cache.get(self.db).await?;

        Ok(project_progress(&dataset.projects, &dataset.tasks))
    }

    /// [`Self::project_progress`] rendered as CSV
    pub async fn project_progress_csv(&self) -> Result<String, Error> {
        let rows = self.project_progress().await?;

        progress_csv(&rows)
    }

    /// Every task with the signed days between its end date and projected date
    pub async fn deviations(&self) -> Result<Vec<TaskDeviationDto>, Error> {
        let dataset = self.cache.get(self.db).await?;

        Ok(dataset
            .tasks
            .iter()
            .map(|task| TaskDeviationDto {
                task_id: task.id,
                project_id: task.project_id,
                description: task.description.clone(),
                end_date: task.end_date,
                projected_date: task.projected_date,
                deviation_days: deviation_days(task.end_date, task.projected_date),
            })
            .collect())
    }
}
