//! Task domain model.
//!
//! # Responsibility
//! - Define the task record rendered by board, dashboard and project views.
//! - Own the closed `TaskStatus` and `Priority` vocabularies.
//!
//! # Invariants
//! - `status` and `priority` are always one of the documented members.
//! - Unrecognized wire values are rejected when a raw record is converted,
//!   never at read sites.
//! - `assignee` is a shared reference by id; it may dangle.

use crate::model::project::ProjectId;
use crate::model::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = String;

/// Board status of a task.
///
/// The set is flat: a task may move between any two statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Fixed board column order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];

    /// Wire value used by seed data and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Column header title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Lowercase badge text, e.g. `in progress`.
    pub fn badge_label(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl FromStr for TaskStatus {
    type Err = TaskRecordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            other => Err(TaskRecordError::UnknownStatus(other.to_string())),
        }
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = TaskRecordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(TaskRecordError::UnknownPriority(other.to_string())),
        }
    }
}

/// A unit of work on a project board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Shared reference into the user roster.
    pub assignee: Option<UserId>,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub project_id: ProjectId,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a `todo` task with a generated id and `medium` priority.
    pub fn new(project_id: impl Into<ProjectId>, title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), project_id, title)
    }

    /// Creates a `todo` task with a caller-provided id.
    ///
    /// Used by seed/import paths where identity already exists.
    pub fn with_id(
        id: impl Into<TaskId>,
        project_id: impl Into<ProjectId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::default(),
            assignee: None,
            due_date: None,
            tags: Vec::new(),
            project_id: project_id.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignee.as_deref() == Some(user_id)
    }
}

/// Untyped task record as it arrives from seed/import data.
///
/// `status` and `priority` stay as raw strings until [`Task::try_from`]
/// validates them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub assignee: Option<UserId>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub project_id: ProjectId,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<RawTask> for Task {
    type Error = TaskRecordError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let status = raw.status.parse::<TaskStatus>()?;
        let priority = match raw.priority.as_deref() {
            Some(value) => value.parse::<Priority>()?,
            None => Priority::default(),
        };
        Ok(Self {
            id: raw.id,
            title: raw.title,
            description: raw.description.filter(|text| !text.trim().is_empty()),
            status,
            priority,
            assignee: raw.assignee,
            due_date: raw.due_date,
            tags: raw.tags,
            project_id: raw.project_id,
            created_at: raw.created_at,
        })
    }
}

/// Rejection reasons for raw task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRecordError {
    UnknownStatus(String),
    UnknownPriority(String),
}

impl Display for TaskRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus(value) => write!(f, "unrecognized task status `{value}`"),
            Self::UnknownPriority(value) => write!(f, "unrecognized task priority `{value}`"),
        }
    }
}

impl Error for TaskRecordError {}
