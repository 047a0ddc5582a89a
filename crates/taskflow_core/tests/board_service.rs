use chrono::NaiveDate;
use taskflow_core::{
    BoardService, BoardServiceError, CoreConfig, EntityStore, NewProject, NewTask, Priority,
    SessionIntent, SettingsTab, TaskStatus, PROJECT_COLORS,
};

fn seeded() -> BoardService {
    BoardService::seeded(CoreConfig::default()).unwrap()
}

#[test]
fn dashboard_projects_selected_project_board() {
    let service = seeded();
    let dashboard = service.dashboard();

    assert_eq!(
        dashboard.project.as_ref().map(|p| p.name.as_str()),
        Some("Website Redesign")
    );
    assert_eq!(dashboard.stats.total, 6);
    assert_eq!(dashboard.completion_percent, 33);
    let counts: Vec<_> = dashboard.columns.iter().map(|column| column.len()).collect();
    assert_eq!(counts, [2, 1, 1, 2]);
    assert_eq!(dashboard.rows.len(), service.store().tasks().len());
}

#[test]
fn dashboard_rows_leave_dangling_references_blank() {
    let document = r#"{
        "projects": [{ "id": "p1", "name": "Board", "color": "hsl(185 70% 42%)" }],
        "tasks": [
            { "id": "1", "title": "orphan", "status": "todo", "assignee": "ghost", "due_date": "2024-12-05",
              "project_id": "gone", "created_at": "2024-12-01T09:00:00Z" }
        ]
    }"#;
    let service = BoardService::new(
        EntityStore::from_json_str(document).unwrap(),
        CoreConfig::default(),
    );
    let row = &service.dashboard().rows[0];
    assert_eq!(row.project_name, None);
    assert_eq!(row.project_color, None);
    assert_eq!(row.assignee, None);
    assert_eq!(row.due_label.as_deref(), Some("Dec 5"));
    assert_eq!(row.status_label, "todo");
}

#[test]
fn unknown_selection_falls_back_to_first_project() {
    let mut service = seeded();
    service.dispatch(SessionIntent::SelectProject("999".to_string()));
    let dashboard = service.dashboard();
    assert_eq!(dashboard.project.map(|p| p.id), Some("1".to_string()));
}

#[test]
fn empty_store_projects_zeroed_dashboard() {
    let service = BoardService::new(EntityStore::new(), CoreConfig::default());
    let dashboard = service.dashboard();
    assert!(dashboard.project.is_none());
    assert_eq!(dashboard.completion_percent, 0);
    assert!(dashboard.columns.iter().all(|column| column.is_empty()));
}

#[test]
fn create_task_appends_todo_and_updates_live_counts() {
    let mut service = seeded();
    service.dispatch(SessionIntent::SelectProject("2".to_string()));
    let before = service.dashboard().stats.total;

    let task_id = service
        .create_task(NewTask {
            project_id: "2".to_string(),
            title: "  Crash reporting  ".to_string(),
            description: Some(String::new()),
            priority: Priority::High,
            assignee_id: Some("u3".to_string()),
            ..NewTask::default()
        })
        .unwrap();

    let dashboard = service.dashboard();
    assert_eq!(dashboard.stats.total, before + 1);
    let todo = &dashboard.columns[0];
    let created = todo.tasks.last().unwrap();
    assert_eq!(created.id, task_id);
    assert_eq!(created.title, "Crash reporting");
    assert_eq!(created.status, TaskStatus::Todo);
    assert_eq!(created.description, None);
    assert_eq!(created.assignee.as_deref(), Some("u3"));

    let card = service
        .projects()
        .cards
        .into_iter()
        .find(|card| card.summary.project.id == "2")
        .unwrap();
    assert_eq!(card.summary.stats.total, before + 1);
}

#[test]
fn create_task_rejects_blank_title_and_unknown_project() {
    let mut service = seeded();
    let blank = service
        .create_task(NewTask {
            project_id: "1".to_string(),
            title: "   ".to_string(),
            ..NewTask::default()
        })
        .unwrap_err();
    assert_eq!(blank, BoardServiceError::BlankTaskTitle);

    let missing = service
        .create_task(NewTask {
            project_id: "404".to_string(),
            title: "Valid".to_string(),
            ..NewTask::default()
        })
        .unwrap_err();
    assert_eq!(missing, BoardServiceError::ProjectNotFound("404".to_string()));
    assert_eq!(service.store().tasks().len(), 12);
}

#[test]
fn create_task_with_unknown_assignee_is_unassigned() {
    let mut service = seeded();
    let task_id = service
        .create_task(NewTask {
            project_id: "1".to_string(),
            title: "Ghost work".to_string(),
            assignee_id: Some("ghost".to_string()),
            ..NewTask::default()
        })
        .unwrap();
    let task = service
        .store()
        .tasks()
        .iter()
        .find(|task| task.id == task_id)
        .unwrap();
    assert_eq!(task.assignee, None);
    assert_eq!(task.priority, Priority::Medium);
}

#[test]
fn create_project_defaults_color_and_starts_empty() {
    let mut service = seeded();
    assert_eq!(
        service.create_project(NewProject::default()).unwrap_err(),
        BoardServiceError::BlankProjectName
    );

    let project_id = service
        .create_project(NewProject {
            name: "Data Platform".to_string(),
            ..NewProject::default()
        })
        .unwrap();
    let card = service
        .projects()
        .cards
        .into_iter()
        .find(|card| card.summary.project.id == project_id)
        .unwrap();
    assert_eq!(card.summary.project.color, PROJECT_COLORS[0]);
    assert_eq!(card.summary.stats.total, 0);
    assert_eq!(card.summary.progress_percent, 0);
    assert!(card.preview_tasks.is_empty());
}

#[test]
fn projects_view_previews_three_tasks_and_team_overflow() {
    let service = seeded();
    let card = &service.projects().cards[0];
    let preview: Vec<_> = card.preview_tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(preview, ["1", "2", "3"]);
    assert_eq!(card.team.initials, ["AC", "SJ", "MW"]);
    assert_eq!(card.team.overflow, 2);
}

#[test]
fn calendar_follows_week_navigation() {
    let mut service = seeded();
    let calendar = service.calendar();
    assert_eq!(calendar.label, "December 2024");
    assert_eq!(calendar.days[0].date, NaiveDate::from_ymd_opt(2024, 12, 9).unwrap());
    assert!(calendar.days[2].is_today);
    assert_eq!(calendar.rows.len(), 12);
    assert_eq!(calendar.rows[0].label, "08:00");

    // Wednesday 09:30 standup lands in the 09:00 row.
    let nine = calendar.rows.iter().find(|row| row.hour == 9).unwrap();
    let wednesday: Vec<_> = nine.cells[2].iter().map(|b| b.meeting.id.as_str()).collect();
    assert_eq!(wednesday, ["m3"]);
    assert_eq!(nine.cells[2][0].attendee_count, 5);
    assert_eq!(nine.cells[2][0].time_label, "09:30");
    assert_eq!(nine.cells[2][0].duration_label, "15m");

    let upcoming = &calendar.upcoming[0];
    assert_eq!(upcoming.date_label, "Mon, Dec 9");
    assert_eq!(upcoming.time_label, "09:00");
    assert_eq!(upcoming.duration_label, "1h 30m");
    assert_eq!(upcoming.attendees.initials.len(), 3);
    assert_eq!(upcoming.attendees.overflow, 1);

    service.dispatch(SessionIntent::NextWeek);
    let next = service.calendar();
    assert_eq!(next.days[0].date, NaiveDate::from_ymd_opt(2024, 12, 16).unwrap());
    assert!(next.days.iter().all(|day| !day.is_today));
    let thirteen = next.rows.iter().find(|row| row.hour == 13).unwrap();
    assert_eq!(thirteen.cells[0][0].meeting.id, "m8");
}

#[test]
fn calendar_at_the_end_of_the_date_range_renders_a_full_week() {
    let config = CoreConfig {
        today: Some(NaiveDate::MAX),
        ..CoreConfig::default()
    };
    let mut service = BoardService::seeded(config).unwrap();
    let calendar = service.calendar();
    assert_eq!(calendar.days[6].date, NaiveDate::MAX);
    assert!(calendar.days[6].is_today);
    assert!(calendar.rows.iter().all(|row| row.cells.iter().all(Vec::is_empty)));

    service.dispatch(SessionIntent::NextWeek);
    assert_eq!(service.calendar().days[6].date, NaiveDate::MAX);

    let earliest = CoreConfig {
        today: Some(NaiveDate::MIN),
        ..CoreConfig::default()
    };
    let mut service = BoardService::seeded(earliest).unwrap();
    service.dispatch(SessionIntent::PreviousWeek);
    assert_eq!(service.calendar().days[0].date, NaiveDate::MIN);
}

#[test]
fn configured_today_overrides_store_reference_date() {
    let config = CoreConfig {
        today: NaiveDate::from_ymd_opt(2024, 12, 15),
        ..CoreConfig::default()
    };
    let service = BoardService::seeded(config).unwrap();
    let calendar = service.calendar();
    assert_eq!(calendar.days[0].date, NaiveDate::from_ymd_opt(2024, 12, 9).unwrap());
    assert!(calendar.days[6].is_today);
}

#[test]
fn team_view_filters_by_search_query() {
    let mut service = seeded();
    assert_eq!(service.team().members.len(), 5);

    service.dispatch(SessionIntent::SetSearchQuery("ALEX".to_string()));
    let team = service.team();
    assert_eq!(team.query, "ALEX");
    assert_eq!(team.members.len(), 1);
    let alex = &team.members[0];
    assert_eq!(alex.email, "alex.chen@company.com");
    assert_eq!(alex.stats.assigned, 3);
    assert_eq!(alex.stats.completed, 1);
}

#[test]
fn settings_view_tracks_tab_and_theme() {
    let mut service = seeded();
    assert_eq!(service.settings().active_tab, SettingsTab::Profile);
    assert!(service.settings().dark_mode);

    service.dispatch(SessionIntent::SelectSettingsTab(SettingsTab::Appearance));
    service.dispatch(SessionIntent::ToggleDarkMode);
    let settings = service.settings();
    assert_eq!(settings.active_tab, SettingsTab::Appearance);
    assert!(!settings.dark_mode);
    assert_eq!(settings.tabs.len(), 4);
}
