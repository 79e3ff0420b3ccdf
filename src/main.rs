use std::sync::Arc;

use lunchbox_backend::infrastructure::config::{Config, LogFormat};
use lunchbox_backend::infrastructure::http::start_http_server;
use lunchbox_backend::infrastructure::id::IdGenerator;
use lunchbox_backend::infrastructure::repositories::{FoodRepository, UserRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Lunchbox Backend on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Id generation shared by all repositories
    let ids = Arc::new(IdGenerator::new(config.node_id));

    // 2. Instantiate repositories (in-memory storage)
    tracing::info!("Instantiating repositories...");
    let user_repo = Arc::new(UserRepository::new(ids.clone()));
    let food_repo = Arc::new(FoodRepository::new(ids.clone()));

    if config.is_development() {
        tracing::info!("Development environment: /admin/reset is enabled");
    }

    // Services and controllers are wired inside the router builder
    start_http_server(config, user_repo, food_repo).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lunchbox_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lunchbox_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
