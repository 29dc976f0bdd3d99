use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and renders it as an
/// [`ErrorResponse`] JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// Path segment is not a valid user id
    InvalidUserId(String),
    /// No user stored under the requested id
    UserNotFound,
    /// Create attempted on an id that is already taken
    UserExists,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidUserId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid user id: expected a non-negative integer, got '{}'", id),
            ),
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            ApiError::UserExists => (StatusCode::CONFLICT, "User already exists".to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Parse a user id taken from the request path
pub fn parse_user_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::InvalidUserId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = render(ApiError::UserNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "User not found"}));
    }

    #[tokio::test]
    async fn test_conflict_body() {
        let (status, body) = render(ApiError::UserExists).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, serde_json::json!({"error": "User already exists"}));
    }

    #[tokio::test]
    async fn test_invalid_id_body() {
        let (status, body) = render(ApiError::InvalidUserId("abc".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("'abc'"));
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("999").unwrap(), 999);
        assert!(matches!(parse_user_id("-1"), Err(ApiError::InvalidUserId(_))));
        assert!(matches!(parse_user_id("not-a-number"), Err(ApiError::InvalidUserId(_))));
    }
}
