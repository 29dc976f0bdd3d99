//! Fixed-id demo routes served on `/user`.
//!
//! Every handler works on the same hardcoded user and answers in plain text.
//! The bindings live in a [`RequestRouter`] over the shared [`UserStore`], so
//! the demo user is also visible through `/users/{id}`.

use axum::http::Method;

use crate::router::RequestRouter;
use crate::routes;
use crate::store::UserStore;

pub const DEMO_USER_ID: u64 = 123;
pub const DEMO_USER_NAME: &str = "John";
pub const DEMO_USER_NEW_NAME: &str = "Jane";

pub const USER_NOT_FOUND: &str = "User not found";
pub const USER_CREATED: &str = "User created";
pub const USER_EXISTS: &str = "User already exists";
pub const USER_UPDATED: &str = "User updated";
pub const USER_DELETED: &str = "User deleted";

/// Build the dispatch table for the `/user` demo routes
pub fn demo_routes(store: &UserStore) -> RequestRouter {
    let get_store = store.clone();
    let create_store = store.clone();
    let update_store = store.clone();
    let delete_store = store.clone();

    RequestRouter::new()
        .route(Method::GET, routes::DEMO_USER, move || {
            match get_store.get(DEMO_USER_ID) {
                Some(user) => user.info(),
                None => USER_NOT_FOUND.to_string(),
            }
        })
        .route(Method::POST, routes::DEMO_USER, move || {
            match create_store.create(DEMO_USER_ID, DEMO_USER_NAME) {
                Some(user) => {
                    tracing::info!("Created demo user with id: {}", user.id);
                    USER_CREATED.to_string()
                }
                None => USER_EXISTS.to_string(),
            }
        })
        .route(Method::PUT, routes::DEMO_USER, move || {
            match update_store.update(DEMO_USER_ID, DEMO_USER_NEW_NAME) {
                Some(user) => {
                    tracing::info!("Updated demo user with id: {}", user.id);
                    USER_UPDATED.to_string()
                }
                None => USER_NOT_FOUND.to_string(),
            }
        })
        .route(Method::DELETE, routes::DEMO_USER, move || {
            delete_store.delete(DEMO_USER_ID);
            USER_DELETED.to_string()
        })
}
