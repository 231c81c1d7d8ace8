use std::sync::Arc;

use vidcat_db::store::VideoStore;

use crate::config::ServerConfig;
use crate::services::{AdminService, PublicService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (admin token, hosting base URL, limits).
    pub config: Arc<ServerConfig>,
    /// Privileged write surface.
    pub admin: AdminService,
    /// Read-only, published-only surface.
    pub public: PublicService,
    /// The store itself, for health probing.
    pub store: Arc<dyn VideoStore>,
}

impl AppState {
    /// Wire both services to the same store.
    pub fn new(store: Arc<dyn VideoStore>, config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            admin: AdminService::new(Arc::clone(&store)),
            public: PublicService::new(Arc::clone(&store)),
            store,
        }
    }
}
