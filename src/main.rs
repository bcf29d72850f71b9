use std::net::SocketAddr;
use std::sync::Arc;

use passdrop::config::Config;
use passdrop::db::create_pool;
use passdrop::migrate::migrate_legacy_passcodes;
use passdrop::proto::health::health_server::HealthServer;
use passdrop::proto::shares::shares_service_server::SharesServiceServer;
use passdrop::rate_limit::RateLimiter;
use passdrop::services::{HealthServiceImpl, SharesServiceImpl};
use passdrop::store::{JsonFileStore, MemoryStore, PostgresStore, ShareStore};

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("passdrop_descriptor");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passdrop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting passdrop gRPC server...");

    // Open the metadata store
    let store: Arc<dyn ShareStore> = match config.store_backend.as_str() {
        "postgres" => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or("DATABASE_URL is required for the postgres store")?;
            tracing::info!("Connecting to database...");
            let pool = create_pool(database_url).await?;
            let store = PostgresStore::new(pool);
            store.ensure_schema().await?;
            tracing::info!("Database connection established");
            Arc::new(store)
        }
        "json" => {
            tracing::info!("Using JSON file store: path={}", config.store_path);
            Arc::new(JsonFileStore::open(&config.store_path).await?)
        }
        "memory" => {
            tracing::warn!("Using in-memory store; shares are lost on shutdown");
            Arc::new(MemoryStore::new())
        }
        other => return Err(format!("Unknown STORE_BACKEND: {}", other).into()),
    };

    // Upgrade any pre-hashing records before the listener starts so every
    // claim handled below can trust the stored hash.
    let report = migrate_legacy_passcodes(store.as_ref(), config.passcode_time_cost).await?;
    if report.migrated > 0 || report.failed > 0 {
        tracing::info!(
            "Legacy passcode migration: migrated={}, failed={}, already_hashed={}",
            report.migrated,
            report.failed,
            report.already_hashed
        );
    }

    // Create services
    let limiter = RateLimiter::new(config.claim_rate_per_minute);
    let shares_service =
        SharesServiceImpl::new(store.clone(), limiter, config.passcode_time_cost);
    let health_service = HealthServiceImpl::new(store);

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    // Build reflection service
    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    // Build and run server with gRPC-Web support
    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new()) // Enable gRPC-Web
        .add_service(reflection_service)
        .add_service(SharesServiceServer::new(shares_service))
        .add_service(HealthServer::new(health_service))
        .serve(addr)
        .await?;

    Ok(())
}
