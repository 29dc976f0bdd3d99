//! Exact-match dispatch table.
//!
//! One table per HTTP method, keyed by the literal request path. No path
//! parameters and no prefix matching: a request either hits a registered
//! binding or gets [`NOT_FOUND`].

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::Method;

/// Text returned by [`RequestRouter::dispatch`] when nothing is bound.
pub const NOT_FOUND: &str = "404 Not Found";

/// A zero-argument handler producing a text body.
pub type RouteHandler = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone, Default)]
pub struct RequestRouter {
    routes: HashMap<Method, HashMap<String, RouteHandler>>,
}

impl RequestRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `method` + `path`, replacing any earlier binding for the same pair.
    pub fn add_route<F>(&mut self, method: Method, path: impl Into<String>, handler: F)
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        let path = path.into();
        let previous = self
            .routes
            .entry(method.clone())
            .or_default()
            .insert(path.clone(), Arc::new(handler));

        if previous.is_some() {
            tracing::debug!("Replaced route binding {} {}", method, path);
        }
    }

    /// Chaining form of [`RequestRouter::add_route`].
    pub fn route<F>(mut self, method: Method, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.add_route(method, path, handler);
        self
    }

    /// Run the handler bound to `method` + `path`, if any.
    pub fn try_dispatch(&self, method: &Method, path: &str) -> Option<String> {
        let handler = self.routes.get(method)?.get(path)?;
        Some(handler())
    }

    /// Run the bound handler, or return [`NOT_FOUND`].
    pub fn dispatch(&self, method: &Method, path: &str) -> String {
        self.try_dispatch(method, path).unwrap_or_else(|| {
            tracing::debug!("No route bound for {} {}", method, path);
            NOT_FOUND.to_string()
        })
    }

    /// Number of (method, path) bindings.
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }
}
