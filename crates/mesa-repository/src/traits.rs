//! Repository trait definitions.

use async_trait::async_trait;
use mesa_core::{MesaResult, PageRequest, PagedResult, Restaurant, RestaurantFilter};

/// Restaurant repository trait.
///
/// The single read operation this system needs: evaluate a filter
/// specification against the restaurant collection and return one page of
/// matches together with the total match count.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Finds restaurants matching the filter, paginated.
    ///
    /// The returned `total_count` covers all matching records, not just the
    /// returned slice; `items` holds at most `page.size` records in a stable
    /// order.
    async fn find_filtered(
        &self,
        filter: &RestaurantFilter,
        page: PageRequest,
    ) -> MesaResult<PagedResult<Restaurant>>;
}
