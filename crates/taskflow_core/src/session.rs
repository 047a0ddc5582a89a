//! Ephemeral per-view session state.
//!
//! # Responsibility
//! - Hold the current project selection, settings tab, calendar position and
//!   search query as one explicit value.
//! - Apply user intents as pure state transitions.
//!
//! # Invariants
//! - `apply` never mutates its receiver; each intent yields a new snapshot.
//! - State is serializable but never persisted.

use crate::model::project::ProjectId;
use crate::projector::calendar::shift_week;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tabs of the account settings page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Security,
    Appearance,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Security,
        SettingsTab::Appearance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Security => "Security",
            Self::Appearance => "Appearance",
        }
    }
}

/// User intent that changes session state only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum SessionIntent {
    SelectProject(ProjectId),
    SelectSettingsTab(SettingsTab),
    PreviousWeek,
    NextWeek,
    /// Jump back to the week containing `today`.
    CurrentWeek,
    SetSearchQuery(String),
    ToggleDarkMode,
}

/// Snapshot of the current selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub selected_project_id: ProjectId,
    pub settings_tab: SettingsTab,
    /// Calendar "today"; week navigation is relative to it.
    pub today: NaiveDate,
    /// Whole weeks between `today` and the displayed week.
    pub week_offset: i32,
    pub search_query: String,
    pub dark_mode: bool,
}

impl SessionState {
    /// Initial state: given project selected, profile tab, current week.
    pub fn new(selected_project_id: impl Into<ProjectId>, today: NaiveDate) -> Self {
        Self {
            selected_project_id: selected_project_id.into(),
            settings_tab: SettingsTab::default(),
            today,
            week_offset: 0,
            search_query: String::new(),
            dark_mode: true,
        }
    }

    /// Date whose week the calendar displays.
    pub fn anchor_date(&self) -> NaiveDate {
        shift_week(self.today, self.week_offset)
    }

    /// Returns the state that results from `intent`.
    pub fn apply(&self, intent: SessionIntent) -> SessionState {
        let mut next = self.clone();
        match intent {
            SessionIntent::SelectProject(project_id) => next.selected_project_id = project_id,
            SessionIntent::SelectSettingsTab(tab) => next.settings_tab = tab,
            SessionIntent::PreviousWeek => next.week_offset = next.week_offset.saturating_sub(1),
            SessionIntent::NextWeek => next.week_offset = next.week_offset.saturating_add(1),
            SessionIntent::CurrentWeek => next.week_offset = 0,
            SessionIntent::SetSearchQuery(query) => next.search_query = query,
            SessionIntent::ToggleDarkMode => next.dark_mode = !next.dark_mode,
        }
        next
    }
}
