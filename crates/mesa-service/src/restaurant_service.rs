//! Restaurant service trait.

use crate::dto::{ListRestaurantsRequest, RestaurantListResponse};
use async_trait::async_trait;
use mesa_core::MesaResult;

/// Restaurant listing use case.
#[async_trait]
pub trait RestaurantService: Send + Sync {
    /// Lists restaurants matching the request's filters, paginated.
    ///
    /// Results are served read-through: a cached page is returned directly
    /// when present, otherwise the store is queried and the page is cached
    /// with a TTL before being returned.
    async fn list_restaurants(
        &self,
        request: ListRestaurantsRequest,
    ) -> MesaResult<RestaurantListResponse>;
}
