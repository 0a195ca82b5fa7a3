//! Application state for Axum handlers.

use mesa_repository::DatabasePool;
use mesa_service::{CacheInterface, RestaurantService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: Arc<dyn RestaurantService>,
    pub db_pool: Arc<DatabasePool>,
    pub cache: Arc<dyn CacheInterface>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        restaurant_service: Arc<dyn RestaurantService>,
        db_pool: Arc<DatabasePool>,
        cache: Arc<dyn CacheInterface>,
    ) -> Self {
        Self {
            restaurant_service,
            db_pool,
            cache,
        }
    }
}
