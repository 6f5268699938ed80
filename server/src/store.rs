//! In-memory todo collection and id assignment.
//!
//! # Design
//! A single `RwLock` guards both the item sequence and the id counter, so an
//! id is assigned and its item appended under the same write guard. Readers
//! share the lock; every mutation is exclusive with every read and every
//! other mutation. Lookup is a linear scan: insertion order is the
//! enumeration order and there is no secondary index.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// A single todo item as stored and returned over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}

/// Candidate fields supplied by a caller on create or replace.
///
/// Unknown fields, including any `id`, are ignored. A missing `name` decodes
/// as empty and is rejected by the store.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("the name field cannot be empty")]
    EmptyName,

    #[error("todo {0} not found")]
    NotFound(i64),

    #[error("todo ids exhausted")]
    IdsExhausted,
}

#[derive(Debug)]
struct Inner {
    items: Vec<Todo>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// Shared handle to the todo collection. Cloning shares the same state.
#[derive(Clone, Debug, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all items in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.items.clone()
    }

    /// Assign the next id to `input` and append it.
    pub async fn create(&self, input: TodoInput) -> Result<Todo, StoreError> {
        validate(&input)?;
        let mut inner = self.inner.write().await;
        // i64::MAX itself is never handed out; the counter must stay above every id.
        let next_id = inner
            .next_id
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted)?;
        let todo = Todo {
            id: inner.next_id,
            name: input.name,
            completed: input.completed,
        };
        inner.next_id = next_id;
        inner.items.push(todo.clone());
        Ok(todo)
    }

    /// Overwrite `name` and `completed` of the item with `id`, keeping its
    /// position and id.
    pub async fn replace(&self, id: i64, input: TodoInput) -> Result<Todo, StoreError> {
        validate(&input)?;
        let mut inner = self.inner.write().await;
        let todo = inner
            .items
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        todo.name = input.name;
        todo.completed = input.completed;
        Ok(todo.clone())
    }

    /// Remove the item with `id` if present. Returns whether anything was
    /// removed; absence is not an error.
    pub async fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        match inner.items.iter().position(|todo| todo.id == id) {
            Some(index) => {
                inner.items.remove(index);
                true
            }
            None => false,
        }
    }
}

fn validate(input: &TodoInput) -> Result<(), StoreError> {
    if input.name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, completed: bool) -> TodoInput {
        TodoInput {
            name: name.to_string(),
            completed,
        }
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = TodoStore::new();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_ids_from_one() {
        let store = TodoStore::new();
        let first = store.create(input("a", false)).await.unwrap();
        let second = store.create(input("b", true)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.completed);
    }

    #[tokio::test]
    async fn create_rejects_empty_name_without_consuming_an_id() {
        let store = TodoStore::new();
        assert_eq!(
            store.create(input("", false)).await,
            Err(StoreError::EmptyName)
        );
        let todo = store.create(input("a", false)).await.unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn create_fails_once_the_id_space_runs_out() {
        let store = TodoStore::new();
        store.inner.write().await.next_id = i64::MAX - 1;

        let last = store.create(input("last", false)).await.unwrap();
        assert_eq!(last.id, i64::MAX - 1);
        assert_eq!(
            store.create(input("overflow", false)).await,
            Err(StoreError::IdsExhausted)
        );
        assert_eq!(store.list().await, vec![last]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = TodoStore::new();
        let first = store.create(input("a", false)).await.unwrap();
        assert!(store.delete(first.id).await);
        let second = store.create(input("b", false)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = TodoStore::new();
        for name in ["x", "y", "z"] {
            store.create(input(name, false)).await.unwrap();
        }
        let names: Vec<_> = store.list().await.into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[tokio::test]
    async fn replace_updates_in_place() {
        let store = TodoStore::new();
        store.create(input("a", false)).await.unwrap();
        let target = store.create(input("b", false)).await.unwrap();
        store.create(input("c", false)).await.unwrap();

        let updated = store.replace(target.id, input("B", true)).await.unwrap();
        assert_eq!(
            updated,
            Todo {
                id: target.id,
                name: "B".to_string(),
                completed: true,
            }
        );
        let todos = store.list().await;
        assert_eq!(todos[1], updated);
        assert_eq!(todos.len(), 3);
    }

    #[tokio::test]
    async fn replace_missing_id_is_not_found() {
        let store = TodoStore::new();
        store.create(input("a", false)).await.unwrap();
        assert_eq!(
            store.replace(42, input("b", false)).await,
            Err(StoreError::NotFound(42))
        );
    }

    #[tokio::test]
    async fn replace_with_empty_name_leaves_item_unchanged() {
        let store = TodoStore::new();
        let todo = store.create(input("a", true)).await.unwrap();
        assert_eq!(
            store.replace(todo.id, input("", false)).await,
            Err(StoreError::EmptyName)
        );
        assert_eq!(store.list().await, vec![todo]);
    }

    #[tokio::test]
    async fn delete_removes_only_the_match_and_is_idempotent() {
        let store = TodoStore::new();
        let a = store.create(input("a", false)).await.unwrap();
        let b = store.create(input("b", false)).await.unwrap();
        let c = store.create(input("c", false)).await.unwrap();

        assert!(store.delete(b.id).await);
        assert!(!store.delete(b.id).await);
        assert!(!store.delete(99).await);
        assert_eq!(store.list().await, vec![a, c]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_ids() {
        let store = TodoStore::new();
        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..100 {
            let store = store.clone();
            tasks.spawn(async move { store.create(input(&format!("t{i}"), false)).await });
        }
        let mut ids = Vec::new();
        while let Some(result) = tasks.join_next().await {
            ids.push(result.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
        assert_eq!(store.list().await.len(), 100);
    }

    #[test]
    fn input_defaults_completed_to_false() {
        let input: TodoInput = serde_json::from_str(r#"{"name":"No completed field"}"#).unwrap();
        assert_eq!(input.name, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn input_ignores_client_supplied_id() {
        let input: TodoInput =
            serde_json::from_str(r#"{"id":7,"name":"Done","completed":true}"#).unwrap();
        assert_eq!(input.name, "Done");
        assert!(input.completed);
    }

    #[test]
    fn todo_serializes_with_fixed_field_names() {
        let todo = Todo {
            id: 3,
            name: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Test", "completed": false})
        );
    }
}
