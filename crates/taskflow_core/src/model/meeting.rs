//! Calendar meeting model.
//!
//! # Invariants
//! - `date` and `start_time` are local wall-clock values; no timezone is
//!   attached, so day and hour bucketing compare like with like.
//! - `attendees` keeps roster order and references users by id.

use crate::model::project::ProjectId;
use crate::model::user::UserId;
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Stable identifier of a meeting.
pub type MeetingId = String;

/// A scheduled meeting shown on the week calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub color: String,
    pub project_id: ProjectId,
    #[serde(default)]
    pub attendees: Vec<UserId>,
}

impl Meeting {
    /// Hour bucket the meeting starts in; minutes are ignored.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Short duration text such as `30m`, `1h` or `1h 30m`.
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{m}m"),
            (h, 0) => format!("{h}h"),
            (h, m) => format!("{h}h {m}m"),
        }
    }

    /// `HH:MM` start time label.
    pub fn time_label(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }
}
