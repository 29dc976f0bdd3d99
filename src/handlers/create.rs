use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateUserRequest, User};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// POST /users handler - Create a user from a JSON body
#[utoipa::path(
    post,
    path = routes::USERS,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid JSON", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    match state.store.create(request.id, request.name) {
        Some(user) => {
            tracing::info!("Created user with id: {}", user.id);
            Ok((StatusCode::CREATED, Json(user)))
        }
        None => {
            tracing::info!("User already exists with id: {}", request.id);
            Err(ApiError::UserExists)
        }
    }
}
