//! Todo handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use common::AppResult;
use domain::{CreateTodo, Todo};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create todo routes
pub fn todo_routes() -> Router<AppState> {
    Router::new().route("/", get(list_todos).post(create_todo))
}

/// List all todos
pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = state.todo_service.list_todos().await?;
    Ok(Json(todos))
}

/// Add a todo; it starts incomplete
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = state.todo_service.add_todo(payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}
