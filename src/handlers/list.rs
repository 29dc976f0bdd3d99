use crate::models::User;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use std::collections::BTreeMap;

/// GET /users handler - List every stored user
///
/// Returns a JSON object mapping each user id to its record, ordered by id.
#[utoipa::path(
    get,
    path = routes::USERS,
    responses(
        (status = 200, description = "All users keyed by id", body = BTreeMap<String, User>)
    ),
    tag = "users"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<BTreeMap<u64, User>>) {
    let users = state.store.list();
    tracing::info!("Listed {} users", users.len());
    (StatusCode::OK, Json(users))
}
