use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skincast::{
    config::Config,
    db::{create_pool, create_redis_client, run_migrations, Cache, PgStore, SkinStore},
    models::product::SEED_PRODUCTS,
    routes::{create_router, AppState},
    services::{weather::weatherapi::WeatherApiProvider, WeatherProvider, WeatherService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("skincast=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    let store = Arc::new(PgStore::new(pool));

    store.seed_products(SEED_PRODUCTS).await?;

    let (cache, cache_handle) = match config.redis_url.as_deref() {
        Some(url) => {
            let (cache, handle) = Cache::new(create_redis_client(url)?).await;
            (Some(cache), Some(handle))
        }
        None => {
            tracing::warn!("REDIS_URL not set, live weather will not be cached");
            (None, None)
        }
    };

    let provider: Option<Arc<dyn WeatherProvider>> = match config.weather_api_key() {
        Some(key) => {
            let provider: Arc<dyn WeatherProvider> = Arc::new(WeatherApiProvider::new(
                key.to_string(),
                config.weather_api_url.clone(),
                config.weather_timeout(),
                cache,
                config.weather_cache_ttl_secs,
            )?);
            tracing::info!(provider = provider.name(), "Live weather enabled");
            Some(provider)
        }
        None => {
            tracing::warn!("WEATHER_API_KEY not set, serving climate defaults only");
            None
        }
    };

    let weather = WeatherService::new(provider, config.default_city.clone());
    let app = create_router(AppState::new(store, weather));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_handle {
        handle.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
