//! Task-state counting and completion percentages.

use std::collections::HashMap;

use crate::{
    model::{hierarchy::WorkStatus, report::ProgressDto},
    server::model::db::{ProjectModel, TaskModel},
};

/// Number of tasks in each recognised state.
///
/// Statuses outside [`WorkStatus`] are not counted anywhere, so
/// `pending + in_progress + done == total()` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub done: u64,
}

impl StatusCounts {
    /// Counts stored status labels.
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            counts.add(status);
        }
        counts
    }

    fn add(&mut self, status: &str) {
        match WorkStatus::from_label(status) {
            Some(WorkStatus::Pending) => self.pending += 1,
            Some(WorkStatus::InProgress) => self.in_progress += 1,
            Some(WorkStatus::Done) => self.done += 1,
            None => {}
        }
    }

    pub fn total(&self) -> u64 {
        self.pending + self.in_progress + self.done
    }

    /// Share of done tasks as a percentage rounded to one decimal, 0 without tasks.
    pub fn completion_pct(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }

        let pct = self.done as f64 / total as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }
}

/// Progress of a single project over the given tasks.
///
/// Tasks belonging to other projects are ignored.
pub fn progress_for(project: &ProjectModel, tasks: &[TaskModel]) -> ProgressDto {
    let counts = StatusCounts::tally(
        tasks
            .iter()
            .filter(|task| task.project_id == project.id)
            .map(|task| task.status.as_str()),
    );

    progress_dto(project, counts)
}

/// One progress row per project, in the order the projects are given.
///
/// Projects without tasks are included at 0 %.
pub fn project_progress(projects: &[ProjectModel], tasks: &[TaskModel]) -> Vec<ProgressDto> {
    let mut by_project: HashMap<i32, StatusCounts> = HashMap::new();
    for task in tasks {
        by_project
            .entry(task.project_id)
            .or_default()
            .add(&task.status);
    }

    projects
        .iter()
        .map(|project| {
            let counts = by_project.get(&project.id).copied().unwrap_or_default();
            progress_dto(project, counts)
        })
        .collect()
}

fn progress_dto(project: &ProjectModel, counts: StatusCounts) -> ProgressDto {
    ProgressDto {
        project_id: project.id,
        name: project.name.clone(),
        responsible: project.responsible.clone(),
        pending: counts.pending,
        in_progress: counts.in_progress,
        done: counts.done,
        total: counts.total(),
        completion_pct: counts.completion_pct(),
    }
}
