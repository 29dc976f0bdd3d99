use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "1.0.0",
        description = "In-memory user CRUD service"
    ),
    paths(
        handlers::health::health_handler,
        handlers::demo::get_demo_user_handler,
        handlers::demo::create_demo_user_handler,
        handlers::demo::update_demo_user_handler,
        handlers::demo::delete_demo_user_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            UpdateUserRequest,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "demo", description = "Fixed demo user (id 123), plain-text responses"),
        (name = "users", description = "User CRUD operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();

        for path in ["/health", "/user", "/users", "/users/{id}"] {
            assert!(paths.contains_key(path), "missing path {}", path);
        }

        let demo = paths["/user"].as_object().unwrap();
        for method in ["get", "post", "put", "delete"] {
            assert!(demo.contains_key(method), "missing /user {}", method);
        }
    }

    #[test]
    fn test_openapi_info() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(doc["info"]["title"], "User API");
        assert_eq!(doc["info"]["version"], "1.0.0");
        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
    }
}
