use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the full HTTP application
///
/// Unmatched requests go through the `/user` dispatch table before a 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::DEMO_USER,
            get(handlers::get_demo_user_handler)
                .post(handlers::create_demo_user_handler)
                .put(handlers::update_demo_user_handler)
                .delete(handlers::delete_demo_user_handler),
        )
        .route(
            routes::USERS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::USER_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(handlers::fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
