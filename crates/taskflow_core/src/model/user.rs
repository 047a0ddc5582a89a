//! Team member model.

use serde::{Deserialize, Serialize};

/// Stable identifier of a team member.
pub type UserId = String;

/// A team member that tasks and meetings reference by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Falls back to [`User::derive_initials`] when absent in seed data.
    #[serde(default)]
    pub initials: String,
    /// Avatar image reference; empty when the member has none.
    #[serde(default)]
    pub avatar: String,
}

impl User {
    /// Creates a member with initials derived from `name`.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        let name = name.into();
        let initials = Self::derive_initials(&name);
        Self {
            id: id.into(),
            name,
            initials,
            avatar: String::new(),
        }
    }

    /// Uppercase first letters of the first two words of `name`.
    pub fn derive_initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Fills `initials` when the record arrived without them.
    pub(crate) fn ensure_initials(&mut self) {
        if self.initials.trim().is_empty() {
            self.initials = Self::derive_initials(&self.name);
        }
    }
}
