//! Page-level view snapshots.
//!
//! # Responsibility
//! - Combine store contents, session state and the projector primitives into
//!   one immutable value per page.
//!
//! # Invariants
//! - Snapshots own their data; later store mutations never change them.
//! - Dangling project/assignee/attendee references resolve to `None` or are
//!   skipped, never an error.

use crate::config::CalendarConfig;
use crate::model::meeting::Meeting;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::model::user::User;
use crate::projector::calendar::{
    day_hours, meetings_for_day, meetings_for_hour, upcoming_meetings, week_label, week_window,
    DAYS_PER_WEEK, WEEKDAY_NAMES,
};
use crate::projector::columns::{group_by_status, Column};
use crate::projector::filters::{filter_by_project, filter_users, resolve_project, user_email};
use crate::projector::stats::{
    compute_project_stats, compute_user_stats, project_summaries, ProjectStats, ProjectSummary,
    UserStats,
};
use crate::session::{SessionState, SettingsTab};
use crate::store::EntityStore;
use chrono::NaiveDate;
use serde::Serialize;

/// Avatars and previews show this many entries before collapsing to `+N`.
pub const PREVIEW_LIMIT: usize = 3;

/// A short list of initials plus the number left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvatarStack {
    pub initials: Vec<String>,
    pub overflow: usize,
}

impl AvatarStack {
    fn from_users<'a, I>(users: I) -> Self
    where
        I: IntoIterator<Item = &'a User>,
    {
        let users: Vec<&User> = users.into_iter().collect();
        Self {
            initials: users
                .iter()
                .take(PREVIEW_LIMIT)
                .map(|user| user.initials.clone())
                .collect(),
            overflow: users.len().saturating_sub(PREVIEW_LIMIT),
        }
    }
}

/// One row of the all-tasks table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub task: Task,
    pub project_name: Option<String>,
    pub project_color: Option<String>,
    pub assignee: Option<User>,
    pub status_label: String,
    pub priority_label: &'static str,
    /// `Dec 15` style due date.
    pub due_label: Option<String>,
}

/// Dashboard page: selected project board plus the full task table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub project: Option<Project>,
    pub stats: ProjectStats,
    pub completion_percent: u32,
    pub columns: [Column; 4],
    pub rows: Vec<TaskRow>,
}

/// One project card on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub summary: ProjectSummary,
    pub preview_tasks: Vec<Task>,
    pub team: AvatarStack,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsView {
    pub cards: Vec<ProjectCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHeader {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub is_today: bool,
}

/// A meeting block inside the hour grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingBlock {
    pub meeting: Meeting,
    pub project_name: Option<String>,
    /// `09:30` style start time.
    pub time_label: String,
    /// `1h 30m` style length.
    pub duration_label: String,
    pub attendee_count: usize,
}

/// One hour row; `cells[i]` belongs to `CalendarView::days[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourRow {
    pub hour: u32,
    pub label: String,
    pub cells: Vec<Vec<MeetingBlock>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingMeeting {
    pub meeting: Meeting,
    pub project_name: Option<String>,
    /// `Wed, Dec 11` style date.
    pub date_label: String,
    pub time_label: String,
    pub duration_label: String,
    pub attendees: AvatarStack,
}

/// Calendar page for the session's anchor week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub label: String,
    pub days: [DayHeader; DAYS_PER_WEEK],
    pub rows: Vec<HourRow>,
    pub upcoming: Vec<UpcomingMeeting>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberCard {
    pub user: User,
    pub email: String,
    pub stats: UserStats,
}

/// Team page filtered by the session search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub query: String,
    pub members: Vec<MemberCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub active_tab: SettingsTab,
    pub tabs: Vec<(SettingsTab, &'static str)>,
    pub dark_mode: bool,
}

pub fn dashboard_view(store: &EntityStore, session: &SessionState) -> DashboardView {
    let project = resolve_project(store.projects(), &session.selected_project_id).cloned();
    let project_tasks = match &project {
        Some(project) => filter_by_project(store.tasks(), &project.id),
        None => Vec::new(),
    };
    let stats = compute_project_stats(&project_tasks);

    DashboardView {
        project,
        stats,
        completion_percent: stats.completion_percent(),
        columns: group_by_status(&project_tasks),
        rows: store.tasks().iter().map(|task| task_row(store, task)).collect(),
    }
}

pub fn projects_view(store: &EntityStore) -> ProjectsView {
    let team = AvatarStack::from_users(store.users());
    let cards = project_summaries(store.projects(), store.tasks())
        .into_iter()
        .map(|summary| {
            let preview_tasks = filter_by_project(store.tasks(), &summary.project.id)
                .into_iter()
                .take(PREVIEW_LIMIT)
                .collect();
            ProjectCard {
                summary,
                preview_tasks,
                team: team.clone(),
            }
        })
        .collect();
    ProjectsView { cards }
}

pub fn calendar_view(
    store: &EntityStore,
    session: &SessionState,
    config: &CalendarConfig,
) -> CalendarView {
    let week = week_window(session.anchor_date());
    let days = std::array::from_fn(|index| DayHeader {
        date: week[index],
        weekday: WEEKDAY_NAMES[index],
        is_today: week[index] == session.today,
    });

    let per_day: Vec<Vec<Meeting>> = week
        .iter()
        .map(|day| meetings_for_day(store.meetings(), *day))
        .collect();
    let rows = day_hours(config.first_hour, config.hour_count)
        .into_iter()
        .map(|hour| HourRow {
            hour,
            label: format!("{hour:02}:00"),
            cells: per_day
                .iter()
                .map(|day_meetings| {
                    meetings_for_hour(day_meetings, hour)
                        .into_iter()
                        .map(|meeting| meeting_block(store, meeting))
                        .collect()
                })
                .collect(),
        })
        .collect();

    let upcoming = upcoming_meetings(store.meetings(), config.upcoming_limit)
        .iter()
        .map(|meeting| UpcomingMeeting {
            meeting: meeting.clone(),
            project_name: project_name(store, &meeting.project_id),
            date_label: meeting.date.format("%a, %b %-d").to_string(),
            time_label: meeting.time_label(),
            duration_label: meeting.duration_label(),
            attendees: AvatarStack::from_users(store.resolve_users(&meeting.attendees)),
        })
        .collect();

    CalendarView {
        label: week_label(&week),
        days,
        rows,
        upcoming,
    }
}

pub fn team_view(store: &EntityStore, session: &SessionState) -> TeamView {
    let members = filter_users(store.users(), &session.search_query)
        .into_iter()
        .map(|user| MemberCard {
            user: user.clone(),
            email: user_email(user),
            stats: compute_user_stats(store.tasks(), &user.id),
        })
        .collect();
    TeamView {
        query: session.search_query.clone(),
        members,
    }
}

pub fn settings_view(session: &SessionState) -> SettingsView {
    SettingsView {
        active_tab: session.settings_tab,
        tabs: SettingsTab::ALL
            .into_iter()
            .map(|tab| (tab, tab.label()))
            .collect(),
        dark_mode: session.dark_mode,
    }
}

fn task_row(store: &EntityStore, task: &Task) -> TaskRow {
    let project = store.project(&task.project_id);
    TaskRow {
        task: task.clone(),
        project_name: project.map(|project| project.name.clone()),
        project_color: project.map(|project| project.color.clone()),
        assignee: task
            .assignee
            .as_deref()
            .and_then(|user_id: &str| store.user(user_id))
            .cloned(),
        status_label: task.status.badge_label(),
        priority_label: task.priority.label(),
        due_label: task
            .due_date
            .map(|date| date.format("%b %-d").to_string()),
    }
}

fn meeting_block(store: &EntityStore, meeting: Meeting) -> MeetingBlock {
    MeetingBlock {
        project_name: project_name(store, &meeting.project_id),
        time_label: meeting.time_label(),
        duration_label: meeting.duration_label(),
        attendee_count: meeting.attendees.len(),
        meeting,
    }
}

fn project_name(store: &EntityStore, project_id: &str) -> Option<String> {
    store.project(project_id).map(|project| project.name.clone())
}
