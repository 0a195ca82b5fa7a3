//! Cache key generators for consistent key naming.

use mesa_core::{PageRequest, RestaurantFilter};

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "mesa:cache";

/// Generate the cache key for a filtered restaurant listing.
///
/// Fields are delimiter-joined in fixed order
/// `name:type:city:page_number:page_size`, with an empty slot for each
/// absent filter. Filter text is embedded verbatim; a `:` inside a value is
/// not escaped.
#[must_use]
pub fn restaurant_listing(filter: &RestaurantFilter, page: PageRequest) -> String {
    format!(
        "{}:restaurants:{}:{}:{}:{}:{}",
        CACHE_PREFIX,
        filter.name.as_deref().unwrap_or(""),
        filter.kind.as_deref().unwrap_or(""),
        filter.city.as_deref().unwrap_or(""),
        page.number,
        page.size
    )
}
