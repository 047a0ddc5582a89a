//! Project model and color palette.
//!
//! # Invariants
//! - A project owns no tasks; tasks point at it through `project_id`.
//! - Task counts are never cached here. Views derive them from the live
//!   task collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a project.
pub type ProjectId = String;

/// Colors offered when creating a project.
pub const PROJECT_COLORS: [&str; 6] = [
    "hsl(185 70% 42%)",
    "hsl(270 70% 55%)",
    "hsl(38 92% 50%)",
    "hsl(145 65% 42%)",
    "hsl(0 72% 55%)",
    "hsl(220 70% 55%)",
];

/// A named group of tasks and meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
}

impl Project {
    /// Creates a project with a generated id.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            color: color.into(),
        }
    }
}
