use crate::router::NOT_FOUND;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
};

fn dispatch(state: &AppState, method: Method) -> String {
    state.demo_router.dispatch(&method, routes::DEMO_USER)
}

/// GET /user handler - Show the demo user
#[utoipa::path(
    get,
    path = routes::DEMO_USER,
    responses(
        (status = 200, description = "\"User: <name>\" or \"User not found\"", body = String, content_type = "text/plain")
    ),
    tag = "demo"
)]
pub async fn get_demo_user_handler(State(state): State<AppState>) -> String {
    dispatch(&state, Method::GET)
}

/// POST /user handler - Create the demo user (id 123, name "John")
#[utoipa::path(
    post,
    path = routes::DEMO_USER,
    responses(
        (status = 200, description = "\"User created\" or \"User already exists\"", body = String, content_type = "text/plain")
    ),
    tag = "demo"
)]
pub async fn create_demo_user_handler(State(state): State<AppState>) -> String {
    dispatch(&state, Method::POST)
}

/// PUT /user handler - Rename the demo user to "Jane"
#[utoipa::path(
    put,
    path = routes::DEMO_USER,
    responses(
        (status = 200, description = "\"User updated\" or \"User not found\"", body = String, content_type = "text/plain")
    ),
    tag = "demo"
)]
pub async fn update_demo_user_handler(State(state): State<AppState>) -> String {
    dispatch(&state, Method::PUT)
}

/// DELETE /user handler - Delete the demo user
#[utoipa::path(
    delete,
    path = routes::DEMO_USER,
    responses(
        (status = 200, description = "Always \"User deleted\"", body = String, content_type = "text/plain")
    ),
    tag = "demo"
)]
pub async fn delete_demo_user_handler(State(state): State<AppState>) -> String {
    dispatch(&state, Method::DELETE)
}

/// Fallback for requests no axum route matched
///
/// Gives the dispatch table a last chance before answering 404.
pub async fn fallback_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> (StatusCode, String) {
    match state.demo_router.try_dispatch(&method, uri.path()) {
        Some(body) => (StatusCode::OK, body),
        None => {
            tracing::info!("No route for {} {}", method, uri.path());
            (StatusCode::NOT_FOUND, NOT_FOUND.to_string())
        }
    }
}
