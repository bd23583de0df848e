//! Session-scoped selection of the current process, subprocess and project.
//!
//! The selection travels with each request as query parameters instead of living in
//! server-side global state. Because the rows it points at may be deleted between two
//! interactions, it is always resolved against the current dataset before use.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::{model::report::SelectionDto, server::service::cache::Dataset};

/// Selection carried between dashboard interactions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SelectionContext {
    /// Selected process
    #[serde(rename = "proceso_id")]
    pub process_id: Option<i32>,
    /// Selected subprocess
    #[serde(rename = "subproceso_id")]
    pub subprocess_id: Option<i32>,
    /// Selected project
    #[serde(rename = "proyecto_id")]
    pub project_id: Option<i32>,
}

impl SelectionContext {
    /// Resolves the selection against the dataset.
    ///
    /// Each level is kept only if the row still exists and belongs to the selected parent;
    /// dropping a level also drops everything below it. A child selected without its
    /// parent fills the parent in from the child's own reference, so a lone project
    /// fills in both its subprocess and its process.
    pub fn resolve(&self, dataset: &Dataset) -> SelectionContext {
        let mut process_id = self
            .process_id
            .filter(|id| dataset.process(*id).is_some());

        // A stale process invalidates whatever was selected beneath it
        if self.process_id.is_some() && process_id.is_none() {
            return SelectionContext::default();
        }

        let subprocess_id = self.subprocess_id.or_else(|| {
            self.project_id
                .and_then(|id| dataset.project(id))
                .map(|p| p.subprocess_id)
        });
        let subprocess = subprocess_id
            .and_then(|id| dataset.subprocess(id))
            .filter(|s| process_id.is_none_or(|p| s.process_id == p));

        let Some(subprocess) = subprocess else {
            return SelectionContext {
                process_id,
                ..Default::default()
            };
        };
        process_id = Some(subprocess.process_id);

        let project = self
            .project_id
            .and_then(|id| dataset.project(id))
            .filter(|p| p.subprocess_id == subprocess.id);

        SelectionContext {
            process_id,
            subprocess_id: Some(subprocess.id),
            project_id: project.map(|p| p.id),
        }
    }
}

impl From<SelectionContext> for SelectionDto {
    fn from(selection: SelectionContext) -> Self {
        Self {
            process_id: selection.process_id,
            subprocess_id: selection.subprocess_id,
            project_id: selection.project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use clinitrack_test_utils::prelude::*;

    use super::SelectionContext;
    use crate::server::service::cache::Dataset;

    fn dataset() -> Dataset {
        Dataset {
            processes: vec![factory::process_model(1, "Admissions")],
            subprocesses: vec![
                factory::subprocess_model(10, 1, "Intake"),
                factory::subprocess_model(11, 1, "Triage"),
            ],
            projects: vec![factory::project_model(100, 1, 10, "Q1 Rollout")],
            ..Default::default()
        }
    }

    #[test]
    fn keeps_consistent_selection() {
        let selection = SelectionContext {
            process_id: Some(1),
            subprocess_id: Some(10),
            project_id: Some(100),
        };

        assert_eq!(selection.resolve(&dataset()), selection);
    }

    #[test]
    fn clears_everything_below_deleted_process() {
        let selection = SelectionContext {
            process_id: Some(2),
            subprocess_id: Some(10),
            project_id: Some(100),
        };

        assert_eq!(selection.resolve(&dataset()), SelectionContext::default());
    }

    #[test]
    fn drops_subprocess_of_another_process() {
        let mut dataset = dataset();
        dataset
            .processes
            .push(factory::process_model(2, "Billing"));
        let selection = SelectionContext {
            process_id: Some(2),
            subprocess_id: Some(10),
            project_id: Some(100),
        };

        let resolved = selection.resolve(&dataset);

        assert_eq!(resolved.process_id, Some(2));
        assert_eq!(resolved.subprocess_id, None);
        assert_eq!(resolved.project_id, None);
    }

    #[test]
    fn drops_project_not_under_selected_subprocess() {
        let selection = SelectionContext {
            process_id: Some(1),
            subprocess_id: Some(11),
            project_id: Some(100),
        };

        let resolved = selection.resolve(&dataset());

        assert_eq!(resolved.subprocess_id, Some(11));
        assert_eq!(resolved.project_id, None);
    }

    #[test]
    fn fills_in_process_from_subprocess() {
        let selection = SelectionContext {
            subprocess_id: Some(10),
            ..Default::default()
        };

        let resolved = selection.resolve(&dataset());

        assert_eq!(resolved.process_id, Some(1));
        assert_eq!(resolved.subprocess_id, Some(10));
    }

    #[test]
    fn fills_in_subprocess_and_process_from_project() {
        let selection = SelectionContext {
            project_id: Some(100),
            ..Default::default()
        };

        let resolved = selection.resolve(&dataset());

        assert_eq!(
            resolved,
            SelectionContext {
                process_id: Some(1),
                subprocess_id: Some(10),
                project_id: Some(100),
            }
        );
    }

    #[test]
    fn drops_lone_project_of_another_process() {
        let mut dataset = dataset();
        dataset
            .processes
            .push(factory::process_model(2, "Billing"));
        let selection = SelectionContext {
            process_id: Some(2),
            project_id: Some(100),
            ..Default::default()
        };

        let resolved = selection.resolve(&dataset);

        assert_eq!(
            resolved,
            SelectionContext {
                process_id: Some(2),
                ..Default::default()
            }
        );
    }
}
