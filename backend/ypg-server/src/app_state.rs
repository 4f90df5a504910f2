use ypg_auth::RouteTable;
use ypg_session::SessionStore;
use ypg_store::PortalStore;

use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SessionStore>,
    pub store: Arc<PortalStore>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(session: SessionStore, store: PortalStore) -> Self {
        Self {
            session: Arc::new(session),
            store: Arc::new(store),
            routes: Arc::new(RouteTable::new()),
        }
    }
}
