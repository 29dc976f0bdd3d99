use crate::error::{parse_user_id, ApiError, ErrorResponse};
use crate::models::{UpdateUserRequest, User};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// PUT /users/{id} handler - Rename an existing user
#[utoipa::path(
    put,
    path = routes::USER_ITEM,
    params(
        ("id" = u64, Path, description = "User id")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid user id or invalid JSON", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let id = parse_user_id(&id_str)?;

    match state.store.update(id, request.name) {
        Some(user) => {
            tracing::info!("Updated user with id: {}", id);
            Ok((StatusCode::OK, Json(user)))
        }
        None => {
            tracing::info!("User not found with id: {}", id);
            Err(ApiError::UserNotFound)
        }
    }
}
