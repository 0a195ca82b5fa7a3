//! Restaurant service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, DEFAULT_TTL};
use crate::dto::{ListRestaurantsRequest, RestaurantListResponse, RestaurantResponse};
use crate::restaurant_service::RestaurantService;
use async_trait::async_trait;
use mesa_core::{MesaResult, ValidateExt};
use mesa_repository::RestaurantRepository;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Read-through caching restaurant service.
///
/// On each request the cache is consulted first; a decodable hit is returned
/// as-is, without re-validation against the store. On a miss the repository
/// is queried and the page is cached with [`DEFAULT_TTL`] (or the TTL set
/// via [`with_ttl`](Self::with_ttl)) before being returned. Empty pages are
/// cached like any other.
///
/// Cache failures never fail the request: read errors and undecodable
/// entries fall through to the store, and write errors are logged and
/// dropped. Concurrent identical misses may each query the store and write
/// the same entry; last writer wins.
pub struct RestaurantServiceImpl<R: RestaurantRepository> {
    repository: Arc<R>,
    cache: Arc<dyn CacheInterface>,
    ttl: Duration,
}

impl<R: RestaurantRepository> RestaurantServiceImpl<R> {
    /// Creates a new restaurant service with the default 5-minute TTL.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            repository,
            cache,
            ttl: DEFAULT_TTL,
        }
    }

    /// Overrides the TTL used for cached listings.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[async_trait]
impl<R: RestaurantRepository + 'static> RestaurantService for RestaurantServiceImpl<R> {
    async fn list_restaurants(
        &self,
        request: ListRestaurantsRequest,
    ) -> MesaResult<RestaurantListResponse> {
        request.validate_request()?;

        let filter = request.filter();
        let page = request.page();
        let cache_key = cache_keys::restaurant_listing(&filter, page);

        debug!(
            "Listing restaurants, filter: {:?}, page: {}, size: {}",
            filter, page.number, page.size
        );

        // Try cache first; read failures and undecodable entries fall
        // through to the store.
        match self.cache.get::<RestaurantListResponse>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!("Cache hit for listing '{}'", cache_key);
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Cache read failed for '{}', querying store: {}", cache_key, e);
            }
        }

        let result = self
            .repository
            .find_filtered(&filter, page)
            .await?
            .map(RestaurantResponse::from);

        if let Err(e) = self.cache.set(&cache_key, &result, self.ttl).await {
            warn!("Failed to cache listing '{}': {}", cache_key, e);
        }

        Ok(result)
    }
}

impl<R: RestaurantRepository> std::fmt::Debug for RestaurantServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantServiceImpl")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesa_core::{
        MesaError, PageRequest, PagedResult, Restaurant, RestaurantFilter, RestaurantId,
    };
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock repository that counts how often the store is queried.
    struct MockRestaurantRepository {
        restaurants: Vec<Restaurant>,
        calls: AtomicUsize,
    }

    impl MockRestaurantRepository {
        fn with_restaurants(restaurants: Vec<Restaurant>) -> Arc<Self> {
            Arc::new(Self {
                restaurants,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RestaurantRepository for MockRestaurantRepository {
        async fn find_filtered(
            &self,
            filter: &RestaurantFilter,
            page: PageRequest,
        ) -> MesaResult<PagedResult<Restaurant>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let matching: Vec<Restaurant> = self
                .restaurants
                .iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect();
            let total = matching.len() as u64;
            let start = usize::try_from(page.offset()).unwrap();
            let end = std::cmp::min(start + page.size as usize, matching.len());
            let items = if start < matching.len() {
                matching[start..end].to_vec()
            } else {
                vec![]
            };
            Ok(PagedResult::new(items, total, page))
        }
    }

    /// In-memory cache mirroring the Redis contract. Expiry is simulated
    /// with `expire_all` instead of waiting for a real TTL to elapse.
    struct InMemoryCache {
        entries: Mutex<HashMap<String, String>>,
        last_ttl: Mutex<Option<Duration>>,
        fail_reads: bool,
    }

    impl InMemoryCache {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(HashMap::new()),
                last_ttl: Mutex::new(None),
                fail_reads: false,
            })
        }

        fn failing_reads() -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(HashMap::new()),
                last_ttl: Mutex::new(None),
                fail_reads: true,
            })
        }

        fn seed_raw(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn expire_all(&self) {
            self.entries.lock().unwrap().clear();
        }

        fn len(&self) -> usize {
            self.entries.lock().unwrap().len()
        }

        fn last_ttl(&self) -> Option<Duration> {
            *self.last_ttl.lock().unwrap()
        }
    }

    #[async_trait]
    impl CacheInterface for InMemoryCache {
        async fn get_raw(&self, key: &str) -> MesaResult<Option<String>> {
            if self.fail_reads {
                return Err(MesaError::Cache("connection refused".to_string()));
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> MesaResult<()> {
            *self.last_ttl.lock().unwrap() = Some(ttl);
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    fn restaurant(id: i64, name: &str, kind: &str, city: &str) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(id),
            name: name.to_string(),
            kind: kind.to_string(),
            address: format!("Rua {} {}", name, id),
            city: city.to_string(),
            region: "Lisboa".to_string(),
            country: "Portugal".to_string(),
        }
    }

    fn lisboa_seed() -> Vec<Restaurant> {
        vec![
            restaurant(1, "Cervejaria Ramiro", "Marisqueira", "Lisboa"),
            restaurant(2, "Solar 31", "Marisqueira", "Lisboa"),
            restaurant(3, "Ze da Mouraria", "Tasca", "Lisboa"),
            restaurant(4, "Taberna Sal Grosso", "Tasca", "Lisboa"),
            restaurant(5, "Pigmeu", "Moderna", "Lisboa"),
            restaurant(6, "Casa Guedes", "Tasca", "Porto"),
        ]
    }

    fn lisboa_request(page_size: u32) -> ListRestaurantsRequest {
        ListRestaurantsRequest {
            city: Some("Lisboa".to_string()),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_miss_queries_store_and_populates_cache() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo.clone(), cache.clone());

        let result = service.list_restaurants(lisboa_request(2)).await.unwrap();

        assert_eq!(result.total_count, 5);
        assert_eq!(result.len(), 2);
        assert_eq!(repo.calls(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_second_identical_call_is_served_from_cache() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo.clone(), cache.clone());

        let first = service.list_restaurants(lisboa_request(2)).await.unwrap();
        let second = service.list_restaurants(lisboa_request(2)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_is_cached_and_reserved() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo.clone(), cache.clone());

        let request = ListRestaurantsRequest {
            city: Some("Coimbra".to_string()),
            ..Default::default()
        };

        let first = service.list_restaurants(request.clone()).await.unwrap();
        assert!(first.is_empty());
        assert_eq!(first.total_count, 0);

        let second = service.list_restaurants(request).await.unwrap();
        assert!(second.is_empty());
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_partial_tail_page() {
        let restaurants: Vec<Restaurant> = (1..=25)
            .map(|i| restaurant(i, &format!("Restaurante {}", i), "Tasca", "Lisboa"))
            .collect();
        let repo = MockRestaurantRepository::with_restaurants(restaurants);
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo, cache);

        let request = ListRestaurantsRequest {
            page_number: Some(3),
            page_size: Some(10),
            ..Default::default()
        };
        let result = service.list_restaurants(request).await.unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.total_count, 25);
        assert_eq!(result.page_number, 3);
    }

    #[tokio::test]
    async fn test_distinct_pages_are_cached_separately() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo.clone(), cache.clone());

        let page1 = ListRestaurantsRequest {
            page_number: Some(1),
            page_size: Some(2),
            ..Default::default()
        };
        let page2 = ListRestaurantsRequest {
            page_number: Some(2),
            page_size: Some(2),
            ..Default::default()
        };

        let first = service.list_restaurants(page1).await.unwrap();
        let second = service.list_restaurants(page2).await.unwrap();

        assert_ne!(first.items, second.items);
        assert_eq!(repo.calls(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_cache_read_failure_falls_through_to_store() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::failing_reads();
        let service = RestaurantServiceImpl::new(repo.clone(), cache);

        let result = service.list_restaurants(lisboa_request(2)).await.unwrap();

        assert_eq!(result.total_count, 5);
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_treated_as_miss() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo.clone(), cache.clone());

        let request = lisboa_request(2);
        let key = cache_keys::restaurant_listing(&request.filter(), request.page());
        cache.seed_raw(&key, "not json at all");

        let result = service.list_restaurants(request).await.unwrap();

        assert_eq!(result.total_count, 5);
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_recomputation() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo.clone(), cache.clone());

        service.list_restaurants(lisboa_request(2)).await.unwrap();
        cache.expire_all();
        service.list_restaurants(lisboa_request(2)).await.unwrap();

        assert_eq!(repo.calls(), 2);
    }

    #[tokio::test]
    async fn test_entries_are_written_with_configured_ttl() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo, cache.clone());

        service.list_restaurants(lisboa_request(2)).await.unwrap();

        assert_eq!(cache.last_ttl(), Some(DEFAULT_TTL));
        assert_eq!(DEFAULT_TTL, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_with_ttl_overrides_default() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo, cache.clone())
            .with_ttl(Duration::from_secs(60));

        service.list_restaurants(lisboa_request(2)).await.unwrap();

        assert_eq!(cache.last_ttl(), Some(Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn test_out_of_range_pagination_is_clamped() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo, cache);

        let request = ListRestaurantsRequest {
            page_number: Some(0),
            page_size: Some(0),
            ..Default::default()
        };
        let result = service.list_restaurants(request).await.unwrap();

        assert_eq!(result.page_number, 1);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_overlong_filter_is_rejected() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo.clone(), cache);

        let request = ListRestaurantsRequest {
            name: Some("x".repeat(256)),
            ..Default::default()
        };
        let result = service.list_restaurants(request).await;

        match result.unwrap_err() {
            MesaError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_cached_payload_round_trips_structurally() {
        let repo = MockRestaurantRepository::with_restaurants(lisboa_seed());
        let cache = InMemoryCache::new();
        let service = RestaurantServiceImpl::new(repo, cache.clone());

        let request = lisboa_request(3);
        let key = cache_keys::restaurant_listing(&request.filter(), request.page());
        let result = service.list_restaurants(request).await.unwrap();

        let raw = cache.entries.lock().unwrap().get(&key).cloned().unwrap();
        let decoded: RestaurantListResponse = serde_json::from_str(&raw).unwrap();
        assert_eq!(decoded, result);

        // Items serialize with the wire field names, `kind` as `type`.
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json["items"][0].get("type").is_some());
        assert_eq!(json["total_count"], 5);
    }
}
