//! Aggregate counts derived live from the task collection.
//!
//! # Invariants
//! - Counts are recomputed from the tasks passed in; nothing is cached.
//! - Completion percentage of an empty project is `0`, never NaN.

use crate::model::project::Project;
use crate::model::task::{Task, TaskStatus};
use crate::projector::filters::filter_by_project;
use serde::Serialize;

/// Per-project counters shown on dashboard and project cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

impl ProjectStats {
    /// Rounded share of completed tasks in percent (half rounds up).
    ///
    /// Returns `0` when `total == 0`.
    pub fn completion_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let completed = self.completed.min(self.total) as u64;
        let total = self.total as u64;
        ((completed * 200 + total) / (total * 2)) as u32
    }
}

/// Per-member counters shown on the team roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub assigned: usize,
    pub completed: usize,
}

/// Live project counters joined with the project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub project: Project,
    pub stats: ProjectStats,
    pub progress_percent: u32,
}

/// Counts all tasks, done tasks and in-progress tasks.
pub fn compute_project_stats<'a, I>(tasks: I) -> ProjectStats
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .fold(ProjectStats::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Done => stats.completed += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Todo | TaskStatus::Review => {}
            }
            stats
        })
}

/// Counts tasks assigned to `user_id` and how many of those are done.
///
/// Unassigned tasks are not counted against anyone.
pub fn compute_user_stats<'a, I>(tasks: I, user_id: &str) -> UserStats
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| task.is_assigned_to(user_id))
        .fold(UserStats::default(), |mut stats, task| {
            stats.assigned += 1;
            if task.is_done() {
                stats.completed += 1;
            }
            stats
        })
}

/// Builds one summary per project, in project order.
pub fn project_summaries(projects: &[Project], tasks: &[Task]) -> Vec<ProjectSummary> {
    projects
        .iter()
        .map(|project| {
            let stats = compute_project_stats(&filter_by_project(tasks, &project.id));
            ProjectSummary {
                project: project.clone(),
                stats,
                progress_percent: stats.completion_percent(),
            }
        })
        .collect()
}
