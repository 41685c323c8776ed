//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{DbAdapter, FileStore, MemoryStore},
    config::{Config, StorageBackend},
    error::ApiError,
    web::{build_router, rest::ApiDoc, state::AppState},
};
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use styleconnect_core::{Catalog, KeyValueStore};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Opens the configured key-value backend.
async fn open_storage(config: &Config) -> Result<Arc<dyn KeyValueStore>, ApiError> {
    match &config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory storage; records are lost on restart.");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::File(path) => {
            let store = FileStore::open(path.clone()).await?;
            info!("Using file storage at {}", store.path().display());
            Ok(Arc::new(store))
        }
        StorageBackend::Postgres { database_url } => {
            info!("Connecting to database...");
            let db_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;
            let db_adapter = DbAdapter::new(db_pool);
            info!("Running database migrations...");
            db_adapter.run_migrations().await?;
            info!("Database migrations complete.");
            Ok(Arc::new(db_adapter))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Open Storage ---
    let storage = open_storage(&config).await?;

    // --- 3. Load & Check the Catalog ---
    let catalog = Catalog::seeded();
    catalog
        .validate()
        .map_err(|e| ApiError::Internal(format!("Catalog is inconsistent: {}", e)))?;
    info!(
        categories = catalog.categories().len(),
        designers = catalog.designers().len(),
        "Catalog loaded."
    );

    // --- 4. Build the Shared AppState ---
    let bind_address = config.bind_address;
    let origin = config.cors_origin.parse::<HeaderValue>().map_err(|e| {
        ApiError::Internal(format!("Invalid CORS origin '{}': {}", config.cors_origin, e))
    })?;
    let app_state = Arc::new(AppState::new(storage, catalog, config));

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    // --- 5. Create the Web Router ---
    let app = Router::new()
        .merge(build_router(app_state).layer(cors))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
