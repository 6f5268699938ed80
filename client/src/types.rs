use serde::{Deserialize, Serialize};

/// A todo item as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}

/// Payload for both create and update. Update replaces both fields, so an
/// unset `completed` becomes `false` on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
