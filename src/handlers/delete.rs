use crate::error::{parse_user_id, ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode};

/// DELETE /users/{id} handler - Remove a user
///
/// Deleting an id that is not stored still answers 204.
#[utoipa::path(
    delete,
    path = routes::USER_ITEM,
    params(
        ("id" = u64, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted (or was never stored)"),
        (status = 400, description = "Invalid user id", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_user_id(&id_str)?;

    state.store.delete(id);

    tracing::info!("Deleted user with id: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
