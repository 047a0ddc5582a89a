//! In-memory entity store.
//!
//! # Responsibility
//! - Hold the process-lifetime collections of users, projects, tasks and
//!   meetings.
//! - Act as the data-entry boundary: raw records are validated and typed
//!   when they are loaded.
//!
//! # Invariants
//! - Collections keep insertion order; projections rely on it.
//! - Records with unrecognized status/priority are dropped and logged,
//!   never surfaced as errors.
//! - Inserts do not validate; callers guarantee required fields.

use crate::model::meeting::Meeting;
use crate::model::project::{Project, ProjectId};
use crate::model::task::{RawTask, Task};
use crate::model::user::{User, UserId};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SEED_DATA: &str = include_str!("seed.json");

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading store contents.
#[derive(Debug)]
pub enum StoreError {
    /// Document is not valid JSON or does not match the record shape.
    Json(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid store document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Deserialize)]
struct StoreDocument {
    /// "Today" the data set was authored against.
    #[serde(default)]
    reference_date: Option<NaiveDate>,
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    tasks: Vec<RawTask>,
    #[serde(default)]
    meetings: Vec<Meeting>,
}

/// Process-lifetime entity collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityStore {
    reference_date: Option<NaiveDate>,
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    meetings: Vec<Meeting>,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the bundled December 2024 mock data set.
    pub fn seeded() -> StoreResult<Self> {
        Self::from_json_str(SEED_DATA)
    }

    /// Loads a store from a JSON document with `users`, `projects`, `tasks`
    /// and `meetings` arrays.
    ///
    /// # Errors
    /// - `StoreError::Json` when the document cannot be parsed.
    ///
    /// Task records with an unrecognized status or priority are skipped with a
    /// warning; they indicate upstream data corruption, not a caller error.
    pub fn from_json_str(document: &str) -> StoreResult<Self> {
        let document: StoreDocument = serde_json::from_str(document)?;

        let mut users = document.users;
        users.iter_mut().for_each(User::ensure_initials);

        let mut tasks = Vec::with_capacity(document.tasks.len());
        for raw in document.tasks {
            let task_id = raw.id.clone();
            match Task::try_from(raw) {
                Ok(task) => tasks.push(task),
                Err(err) => warn!(
                    "event=task_dropped module=store status=skipped task_id={} reason=\"{}\"",
                    task_id, err
                ),
            }
        }

        let store = Self {
            reference_date: document.reference_date,
            users,
            projects: document.projects,
            tasks,
            meetings: document.meetings,
        };
        debug!(
            "event=store_loaded module=store status=ok users={} projects={} tasks={} meetings={}",
            store.users.len(),
            store.projects.len(),
            store.tasks.len(),
            store.meetings.len()
        );
        Ok(store)
    }

    /// Calendar "today" the loaded data set was authored against, if any.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Looks up a user; `None` for dangling references.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Looks up a project; `None` for dangling references.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Resolves attendee ids to users, skipping ids with no roster entry.
    pub fn resolve_users<'a>(&'a self, ids: &'a [UserId]) -> impl Iterator<Item = &'a User> + 'a {
        ids.iter().filter_map(move |id| self.user(id))
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn insert_project(&mut self, project: Project) -> ProjectId {
        let id = project.id.clone();
        self.projects.push(project);
        id
    }

    pub fn insert_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn insert_meeting(&mut self, meeting: Meeting) {
        self.meetings.push(meeting);
    }
}
