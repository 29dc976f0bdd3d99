use crate::demo::demo_routes;
use crate::router::RequestRouter;
use crate::store::UserStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub demo_router: Arc<RequestRouter>,
}

impl AppState {
    /// Wire the `/user` dispatch table to `store`
    pub fn new(store: UserStore) -> Self {
        let demo_router = Arc::new(demo_routes(&store));
        tracing::debug!("Registered {} demo routes", demo_router.len());
        Self { store, demo_router }
    }
}
