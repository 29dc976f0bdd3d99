use serde::{Deserialize, Serialize};

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    #[schema(example = 123)]
    pub id: u64,
    #[schema(example = "John")]
    pub name: String,
}

impl User {
    /// Plain-text summary used by the `/user` demo routes
    pub fn info(&self) -> String {
        format!("User: {}", self.name)
    }
}

/// Request body for POST /users
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub id: u64,
    pub name: String,
}

/// Request body for PUT /users/{id}
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    pub name: String,
}
