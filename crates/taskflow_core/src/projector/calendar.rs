//! Week calendar windowing and meeting bucketing.
//!
//! # Invariants
//! - Weeks run Monday..Sunday; a Sunday anchor belongs to the week that ends
//!   on it.
//! - Dates are compared as local calendar dates with no timezone conversion.
//! - Window and shift results clamp to `NaiveDate::MIN..=NaiveDate::MAX`;
//!   a week cut by the edge of the range slides inward to stay seven
//!   consecutive days.

use crate::model::meeting::Meeting;
use chrono::{Datelike, Days, NaiveDate};

/// Number of days in a calendar week.
pub const DAYS_PER_WEEK: usize = 7;

/// Column headers matching `week_window` order.
pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// The Monday..Sunday week containing `anchor`.
pub fn week_window(anchor: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    // Sunday (0) is the last day of its week, six days after Monday.
    let days_since_monday = match anchor.weekday().num_days_from_sunday() {
        0 => 6,
        day => day - 1,
    };
    let monday = anchor
        .checked_sub_days(Days::new(u64::from(days_since_monday)))
        .unwrap_or(NaiveDate::MIN);
    let last_day = Days::new(DAYS_PER_WEEK as u64 - 1);
    let start = match monday.checked_add_days(last_day) {
        Some(_) => monday,
        None => NaiveDate::MAX.checked_sub_days(last_day).unwrap_or(monday),
    };
    std::array::from_fn(|offset| {
        start
            .checked_add_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Moves `anchor` by whole weeks; negative values go back in time.
///
/// Saturates at `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn shift_week(anchor: NaiveDate, weeks: i32) -> NaiveDate {
    let days = Days::new(u64::from(weeks.unsigned_abs()) * DAYS_PER_WEEK as u64);
    if weeks >= 0 {
        anchor.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    } else {
        anchor.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
    }
}

/// Header label such as `December 2024`, taken from the week's Monday.
pub fn week_label(week: &[NaiveDate; DAYS_PER_WEEK]) -> String {
    week[0].format("%B %Y").to_string()
}

/// Meetings scheduled on `day`, in input order.
pub fn meetings_for_day<'a, I>(meetings: I, day: NaiveDate) -> Vec<Meeting>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    meetings
        .into_iter()
        .filter(|meeting| meeting.date == day)
        .cloned()
        .collect()
}

/// Meetings that start within `hour`; a 9:45 start lands in the 9:00 bucket.
///
/// Hours outside `0..=23` match nothing.
pub fn meetings_for_hour<'a, I>(day_meetings: I, hour: u32) -> Vec<Meeting>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    day_meetings
        .into_iter()
        .filter(|meeting| meeting.start_hour() == hour)
        .cloned()
        .collect()
}

/// First `limit` meetings, in input order.
pub fn upcoming_meetings(meetings: &[Meeting], limit: usize) -> &[Meeting] {
    &meetings[..meetings.len().min(limit)]
}

/// Consecutive grid hours starting at `first_hour`, clipped to the day.
pub fn day_hours(first_hour: u32, count: u32) -> Vec<u32> {
    (first_hour..first_hour.saturating_add(count))
        .take_while(|hour| *hour < 24)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{day_hours, shift_week, week_label, week_window};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_anchor_starts_its_own_week() {
        assert_eq!(week_window(date(2024, 12, 9))[0], date(2024, 12, 9));
    }

    #[test]
    fn week_crossing_year_boundary() {
        let week = week_window(date(2025, 1, 1));
        assert_eq!(week[0], date(2024, 12, 30));
        assert_eq!(week[6], date(2025, 1, 5));
        assert_eq!(week_label(&week), "December 2024");
    }

    #[test]
    fn shift_week_moves_by_seven_days() {
        assert_eq!(shift_week(date(2024, 12, 11), 1), date(2024, 12, 18));
        assert_eq!(shift_week(date(2024, 12, 11), -2), date(2024, 11, 27));
    }

    #[test]
    fn shift_week_saturates_at_calendar_range() {
        assert_eq!(shift_week(date(2024, 12, 11), i32::MAX), NaiveDate::MAX);
        assert_eq!(shift_week(date(2024, 12, 11), i32::MIN), NaiveDate::MIN);
        assert_eq!(shift_week(NaiveDate::MAX, 0), NaiveDate::MAX);
    }

    #[test]
    fn week_at_range_edges_stays_seven_consecutive_days() {
        let first = week_window(NaiveDate::MIN);
        assert_eq!(first[0], NaiveDate::MIN);
        let last = week_window(NaiveDate::MAX);
        assert_eq!(last[6], NaiveDate::MAX);
        for week in [first, last] {
            for pair in week.windows(2) {
                assert_eq!(pair[0].succ_opt(), Some(pair[1]));
            }
        }
    }

    #[test]
    fn day_hours_default_grid_and_clipping() {
        assert_eq!(day_hours(8, 12), (8..20).collect::<Vec<_>>());
        assert_eq!(day_hours(22, 5), vec![22, 23]);
    }
}
