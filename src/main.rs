use catalog_cart_rust::access::schema::provision_memory_store;
use catalog_cart_rust::config::{ServiceConfig, StoreBackend};
use catalog_cart_rust::router::create_app_router;
use catalog_cart_rust::state::AppState;
use catalog_cart_rust::store::KeyValueStore;
use catalog_cart_rust::telemetry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = ServiceConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    // One store client for the lifetime of the process
    let store = connect_store(&config).await?;
    let state = Arc::new(AppState::new(store));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn connect_store(
    config: &ServiceConfig,
) -> Result<Arc<dyn KeyValueStore>, Box<dyn std::error::Error>> {
    match config.backend {
        StoreBackend::Memory => {
            let catalog = config.load_catalog_seed()?;
            let store = provision_memory_store(&catalog).await?;
            Ok(Arc::new(store))
        }
        #[cfg(feature = "dynamodb")]
        StoreBackend::DynamoDb => {
            let store = catalog_cart_rust::store::DynamoDbStore::from_env().await;
            tracing::info!("using DynamoDB with ambient credentials");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "dynamodb"))]
        StoreBackend::DynamoDb => {
            Err("STORE_BACKEND=dynamodb requires building with the `dynamodb` feature".into())
        }
    }
}
