//! Core domain logic for the TaskFlow project board.
//! Entities live in memory; every page is a pure projection over them.

pub mod config;
pub mod logging;
pub mod model;
pub mod projector;
pub mod service;
pub mod session;
pub mod store;

pub use config::{CalendarConfig, ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::meeting::{Meeting, MeetingId};
pub use model::project::{Project, ProjectId, PROJECT_COLORS};
pub use model::task::{Priority, RawTask, Task, TaskId, TaskRecordError, TaskStatus};
pub use model::user::{User, UserId};
pub use projector::calendar::{meetings_for_day, meetings_for_hour, shift_week, week_window};
pub use projector::columns::{group_by_status, Column};
pub use projector::filters::{filter_by_project, filter_users, resolve_project};
pub use projector::stats::{
    compute_project_stats, compute_user_stats, project_summaries, ProjectStats, ProjectSummary,
    UserStats,
};
pub use service::board_service::{BoardService, BoardServiceError, NewProject, NewTask};
pub use session::{SessionIntent, SessionState, SettingsTab};
pub use store::{EntityStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
