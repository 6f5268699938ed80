//! One handler per route. Each validates its input, calls exactly one store
//! operation and renders the result.
//!
//! Request bodies are decoded as JSON whatever `Content-Type` says.

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::store::{Todo, TodoInput, TodoStore};

pub async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let Json(input) = Json::<TodoInput>::from_bytes(&body)?;
    let todo = store.create(input).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok(Json(todo))
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let Json(input) = Json::<TodoInput>::from_bytes(&body)?;
    let todo = store.replace(id, input).await?;
    tracing::info!(id, "todo replaced");
    Ok(Json(todo))
}

/// Deleting an absent id still answers 204: delete means "ensure absent".
pub async fn delete_todo(
    State(store): State<TodoStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let removed = store.delete(id).await;
    tracing::info!(id, removed, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
