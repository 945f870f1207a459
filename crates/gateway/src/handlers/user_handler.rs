//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::UserDto;

use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

/// List all users as `{id, name, email}`
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}
