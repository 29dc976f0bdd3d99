use crate::error::{parse_user_id, ApiError, ErrorResponse};
use crate::models::User;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /users/{id} handler - Fetch a single user
#[utoipa::path(
    get,
    path = routes::USER_ITEM,
    params(
        ("id" = u64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let id = parse_user_id(&id_str)?;

    match state.store.get(id) {
        Some(user) => {
            tracing::info!("Retrieved user with id: {}", id);
            Ok((StatusCode::OK, Json(user)))
        }
        None => {
            tracing::info!("User not found with id: {}", id);
            Err(ApiError::UserNotFound)
        }
    }
}
