//! Selection and filtering helpers.

use crate::model::project::Project;
use crate::model::task::Task;
use crate::model::user::User;

/// Tasks belonging to `project_id`, in input order.
pub fn filter_by_project<'a, I>(tasks: I, project_id: &str) -> Vec<Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| task.project_id == project_id)
        .cloned()
        .collect()
}

/// The selected project, falling back to the first one for unknown ids.
///
/// Returns `None` only when there are no projects at all.
pub fn resolve_project<'a>(projects: &'a [Project], project_id: &str) -> Option<&'a Project> {
    projects
        .iter()
        .find(|project| project.id == project_id)
        .or_else(|| projects.first())
}

/// Members whose name contains `query`, ignoring case.
///
/// A blank query matches everyone.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|user| needle.is_empty() || user.name.to_lowercase().contains(&needle))
        .collect()
}

/// Directory address such as `alex.chen@company.com`.
pub fn user_email(user: &User) -> String {
    format!("{}@company.com", user.name.to_lowercase().replacen(' ', ".", 1))
}

#[cfg(test)]
mod tests {
    use super::{filter_users, resolve_project, user_email};
    use crate::model::project::Project;
    use crate::model::user::User;

    #[test]
    fn resolve_project_falls_back_to_first() {
        let projects = vec![
            Project::new("Alpha", "hsl(0 0% 0%)"),
            Project::new("Beta", "hsl(0 0% 0%)"),
        ];
        let beta_id = projects[1].id.clone();
        assert_eq!(
            resolve_project(&projects, &beta_id).map(|p| p.name.as_str()),
            Some("Beta")
        );
        assert_eq!(
            resolve_project(&projects, "missing").map(|p| p.name.as_str()),
            Some("Alpha")
        );
        assert!(resolve_project(&[], "missing").is_none());
    }

    #[test]
    fn filter_users_is_case_insensitive() {
        let users = vec![User::new("u1", "Alex Chen"), User::new("u2", "Sarah Johnson")];
        let names: Vec<_> = filter_users(&users, "  CHEN")
            .into_iter()
            .map(|user| user.name.as_str())
            .collect();
        assert_eq!(names, ["Alex Chen"]);
        assert_eq!(filter_users(&users, "").len(), 2);
    }

    #[test]
    fn user_email_replaces_first_space_only() {
        assert_eq!(
            user_email(&User::new("u1", "Maria De Souza")),
            "maria.de souza@company.com"
        );
    }
}
