//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load the bundled board data and print one line per page projection.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Optional first argument: path to a JSON `CoreConfig` file.

use std::error::Error;
use taskflow_core::{init_logging, BoardService, CoreConfig, SessionIntent};

fn load_config() -> Result<CoreConfig, Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CoreConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => CoreConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let mut board = BoardService::seeded(config)?;
    println!("taskflow_core version={}", taskflow_core::core_version());

    let dashboard = board.dashboard();
    let project = dashboard
        .project
        .as_ref()
        .map(|project| project.name.as_str())
        .unwrap_or("-");
    println!(
        "dashboard project=\"{}\" total={} in_progress={} completed={} completion={}%",
        project,
        dashboard.stats.total,
        dashboard.stats.in_progress,
        dashboard.stats.completed,
        dashboard.completion_percent
    );
    for column in &dashboard.columns {
        println!("  column \"{}\" tasks={}", column.title, column.len());
    }

    for card in board.projects().cards {
        println!(
            "project \"{}\" tasks={} progress={}%",
            card.summary.project.name, card.summary.stats.total, card.summary.progress_percent
        );
    }

    for week_intent in [None, Some(SessionIntent::NextWeek)] {
        if let Some(intent) = week_intent {
            board.dispatch(intent);
        }
        let calendar = board.calendar();
        let meetings: usize = calendar
            .rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .map(Vec::len)
            .sum();
        println!(
            "calendar week_of={} label=\"{}\" meetings_in_grid={}",
            calendar.days[0].date, calendar.label, meetings
        );
    }

    for member in board.team().members {
        println!(
            "member {} assigned={} completed={}",
            member.user.initials, member.stats.assigned, member.stats.completed
        );
    }

    Ok(())
}
