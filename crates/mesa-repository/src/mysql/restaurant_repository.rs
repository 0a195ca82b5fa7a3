//! MySQL restaurant repository implementation.

use crate::{pool::DatabasePool, traits::RestaurantRepository};
use async_trait::async_trait;
use mesa_core::{
    MesaResult, PageRequest, PagedResult, Restaurant, RestaurantFilter, RestaurantId,
};
use sqlx::{FromRow, MySql, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

/// MySQL restaurant repository implementation.
///
/// Translates a [`RestaurantFilter`] into dynamic `LIKE '%…%'` predicates.
/// COUNT and page SELECT are issued as two statements built from the same
/// filter; rows are ordered by `id` so pages are stable across requests.
#[derive(Clone)]
pub struct MySqlRestaurantRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlRestaurantRepository {
    /// Creates a new MySQL restaurant repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a restaurant.
#[derive(Debug, FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    kind: String,
    address: String,
    city: String,
    region: String,
    country: String,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Self {
            id: RestaurantId::new(row.id),
            name: row.name,
            kind: row.kind,
            address: row.address,
            city: row.city,
            region: row.region,
            country: row.country,
        }
    }
}

/// Builds a `LIKE` pattern for a substring match, escaping `\`, `%` and `_`
/// so user input is matched literally.
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Appends the filter predicates to a query ending in `WHERE 1=1`.
fn push_filters(builder: &mut QueryBuilder<'_, MySql>, filter: &RestaurantFilter) {
    if let Some(name) = &filter.name {
        builder.push(" AND name LIKE ");
        builder.push_bind(like_pattern(name));
    }
    if let Some(kind) = &filter.kind {
        builder.push(" AND kind LIKE ");
        builder.push_bind(like_pattern(kind));
    }
    if let Some(city) = &filter.city {
        builder.push(" AND city LIKE ");
        builder.push_bind(like_pattern(city));
    }
}

#[async_trait]
impl RestaurantRepository for MySqlRestaurantRepository {
    async fn find_filtered(
        &self,
        filter: &RestaurantFilter,
        page: PageRequest,
    ) -> MesaResult<PagedResult<Restaurant>> {
        debug!(
            "Finding restaurants, filter: {:?}, page: {}, size: {}",
            filter, page.number, page.size
        );

        let mut count_query =
            QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM restaurants WHERE 1=1");
        push_filters(&mut count_query, filter);

        let total_count: i64 = count_query
            .build_query_scalar()
            .fetch_one(self.pool.inner())
            .await?;

        let mut select_query = QueryBuilder::<MySql>::new(
            "SELECT id, name, kind, address, city, region, country FROM restaurants WHERE 1=1",
        );
        push_filters(&mut select_query, filter);
        select_query.push(" ORDER BY id LIMIT ");
        select_query.push_bind(page.limit());
        select_query.push(" OFFSET ");
        select_query.push_bind(page.offset());

        let rows: Vec<RestaurantRow> = select_query
            .build_query_as()
            .fetch_all(self.pool.inner())
            .await?;

        let items = rows.into_iter().map(Restaurant::from).collect();
        Ok(PagedResult::new(items, total_count as u64, page))
    }
}

impl std::fmt::Debug for MySqlRestaurantRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlRestaurantRepository")
            .finish_non_exhaustive()
    }
}
