//! Status-board column grouping.

use crate::model::task::{Task, TaskStatus};
use serde::Serialize;

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub status: TaskStatus,
    pub title: &'static str,
    pub tasks: Vec<Task>,
}

impl Column {
    fn empty(status: TaskStatus) -> Self {
        Self {
            status,
            title: status.title(),
            tasks: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Partitions `tasks` into the four board columns.
///
/// Columns come back in `TaskStatus::ALL` order and are always present. Each
/// column keeps the relative input order of its tasks.
pub fn group_by_status<'a, I>(tasks: I) -> [Column; 4]
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut columns = TaskStatus::ALL.map(Column::empty);
    for task in tasks {
        columns[column_index(task.status)].tasks.push(task.clone());
    }
    columns
}

fn column_index(status: TaskStatus) -> usize {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Review => 2,
        TaskStatus::Done => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::{column_index, group_by_status};
    use crate::model::task::{Task, TaskStatus};

    #[test]
    fn column_index_matches_fixed_order() {
        for (index, status) in TaskStatus::ALL.into_iter().enumerate() {
            assert_eq!(column_index(status), index);
        }
    }

    #[test]
    fn empty_input_yields_four_titled_columns() {
        let tasks: Vec<Task> = Vec::new();
        let columns = group_by_status(&tasks);
        let titles: Vec<_> = columns.iter().map(|column| column.title).collect();
        assert_eq!(titles, ["To Do", "In Progress", "Review", "Done"]);
        assert!(columns.iter().all(|column| column.is_empty()));
    }
}
