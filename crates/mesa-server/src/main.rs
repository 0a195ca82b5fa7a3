//! # Mesa Server
//!
//! Main entry point for the Mesa restaurant listing service.
//! Wires the MySQL repository, Redis listing cache, service layer, and
//! REST API into a single process.

use deadpool_redis::Runtime;
use mesa_config::{ConfigLoader, RedisConfig};
use mesa_core::{MesaError, MesaResult};
use mesa_repository::{create_pool, MySqlRestaurantRepository};
use mesa_rest::{create_router, AppState};
use mesa_service::{CacheInterface, RedisCacheService, RestaurantServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting Mesa Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> MesaResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get();

    info!("Environment: {}", config.app.environment);

    // Database pool and schema
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Listing cache
    let cache = create_cache(&config.redis)?;

    // Explicit wiring, repository into service into REST state
    let repository = Arc::new(MySqlRestaurantRepository::new(db_pool.clone()));
    let service = RestaurantServiceImpl::new(repository, cache.clone())
        .with_ttl(config.cache.listing_ttl());

    let app_state = AppState::new(Arc::new(service), db_pool.clone(), cache);
    let router = create_router(app_state, &config.server);

    let rest_addr = config.server.rest_addr();
    info!("Starting REST server on http://{}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| MesaError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MesaError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the listing cache from configuration.
///
/// When Redis is disabled every lookup misses and writes are dropped, so
/// the service degrades to querying the store directly.
fn create_cache(redis_config: &RedisConfig) -> MesaResult<Arc<dyn CacheInterface>> {
    if !redis_config.enabled {
        warn!("Redis disabled, listing cache is inactive");
        return Ok(Arc::new(RedisCacheService::disabled()));
    }

    let mut pool_config = deadpool_redis::Config::from_url(&redis_config.url);
    pool_config.pool = Some(deadpool_redis::PoolConfig::new(
        redis_config.pool_size as usize,
    ));
    let pool = pool_config
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| MesaError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

    info!("Connected Redis listing cache at {}", redis_config.url);
    Ok(Arc::new(RedisCacheService::new(Arc::new(pool))))
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mesa=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
