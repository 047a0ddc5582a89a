//! Board use-case service.
//!
//! # Responsibility
//! - Own the entity store and session state for one view instance.
//! - Validate creation input before it reaches the store.
//! - Hand out immutable page snapshots.
//!
//! # Invariants
//! - Each intent is applied in full before the next snapshot is taken.
//! - New tasks start in `todo`; project counts are never cached.

use crate::config::CoreConfig;
use crate::model::project::{Project, ProjectId, PROJECT_COLORS};
use crate::model::task::{Priority, Task, TaskId};
use crate::model::user::UserId;
use crate::projector::views::{
    calendar_view, dashboard_view, projects_view, settings_view, team_view, CalendarView,
    DashboardView, ProjectsView, SettingsView, TeamView,
};
use crate::session::{SessionIntent, SessionState};
use crate::store::{EntityStore, StoreResult};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Creation input rejected at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Project name is blank after trim.
    BlankProjectName,
    /// Task title is blank after trim.
    BlankTaskTitle,
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankProjectName => write!(f, "project name is required"),
            Self::BlankTaskTitle => write!(f, "task title is required"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for BoardServiceError {}

/// Request model for a new project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    /// Defaults to the first palette color.
    pub color: Option<String>,
}

/// Request model for a new task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub project_id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    /// Ids with no roster entry leave the task unassigned.
    pub assignee_id: Option<UserId>,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
}

/// Store + session facade for one board instance.
pub struct BoardService {
    store: EntityStore,
    session: SessionState,
    config: CoreConfig,
}

impl BoardService {
    /// Creates a service over `store`.
    ///
    /// Calendar "today" comes from `config.today`, then the store reference
    /// date, then the local clock. The initial project is
    /// `config.initial_project_id` or the first project.
    pub fn new(store: EntityStore, config: CoreConfig) -> Self {
        let today = config
            .today
            .or_else(|| store.reference_date())
            .unwrap_or_else(|| Local::now().date_naive());
        let initial_project = config
            .initial_project_id
            .clone()
            .or_else(|| store.projects().first().map(|project| project.id.clone()))
            .unwrap_or_default();

        info!(
            "event=board_open module=service status=ok projects={} tasks={} today={}",
            store.projects().len(),
            store.tasks().len(),
            today
        );

        Self {
            session: SessionState::new(initial_project, today),
            store,
            config,
        }
    }

    /// Creates a service over the bundled mock data.
    pub fn seeded(config: CoreConfig) -> StoreResult<Self> {
        Ok(Self::new(EntityStore::seeded()?, config))
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Applies a session intent and returns the resulting state.
    pub fn dispatch(&mut self, intent: SessionIntent) -> &SessionState {
        debug!("event=intent module=service status=ok intent={intent:?}");
        self.session = self.session.apply(intent);
        &self.session
    }

    /// Adds a project and returns its generated id.
    pub fn create_project(&mut self, request: NewProject) -> Result<ProjectId, BoardServiceError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(BoardServiceError::BlankProjectName);
        }

        let color = request
            .color
            .filter(|color| !color.trim().is_empty())
            .unwrap_or_else(|| PROJECT_COLORS[0].to_string());
        let mut project = Project::new(name, color);
        project.description = non_blank(request.description);

        let project_id = self.store.insert_project(project);
        info!("event=project_created module=service status=ok project_id={project_id}");
        Ok(project_id)
    }

    /// Adds a `todo` task to an existing project and returns its id.
    pub fn create_task(&mut self, request: NewTask) -> Result<TaskId, BoardServiceError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(BoardServiceError::BlankTaskTitle);
        }
        if self.store.project(&request.project_id).is_none() {
            return Err(BoardServiceError::ProjectNotFound(request.project_id));
        }

        let mut task = Task::new(request.project_id, title);
        task.description = non_blank(request.description);
        task.priority = request.priority;
        task.assignee = request
            .assignee_id
            .filter(|user_id| self.store.user(user_id).is_some());
        task.due_date = request.due_date;
        task.tags = request.tags;

        let task_id = task.id.clone();
        info!(
            "event=task_created module=service status=ok task_id={} project_id={} assigned={}",
            task_id,
            task.project_id,
            task.assignee.is_some()
        );
        self.store.insert_task(task);
        Ok(task_id)
    }

    pub fn dashboard(&self) -> DashboardView {
        dashboard_view(&self.store, &self.session)
    }

    pub fn projects(&self) -> ProjectsView {
        projects_view(&self.store)
    }

    pub fn calendar(&self) -> CalendarView {
        calendar_view(&self.store, &self.session, &self.config.calendar)
    }

    pub fn team(&self) -> TeamView {
        team_view(&self.store, &self.session)
    }

    pub fn settings(&self) -> SettingsView {
        settings_view(&self.session)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
