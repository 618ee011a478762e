// src/main.rs

use dotenvy::dotenv;
use kindness_network::config::Config;
use kindness_network::models::PostKind;
use kindness_network::routes;
use kindness_network::seed::seed_sample_acts;
use kindness_network::state::AppState;
use kindness_network::store::{self, Store};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Open the configured backend and apply migrations
    let store = store::connect(&config)
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize storage: {}", e));

    if config.seed_sample_data {
        if let Err(e) = seed_if_empty(store.as_ref()).await {
            tracing::error!("Failed to seed sample data: {:?}", e);
        }
    }

    // Create AppState
    let state = AppState {
        store,
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {}: {}", addr, e));
    tracing::info!("Listening on {}", addr);

    // Start the server
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}

async fn seed_if_empty(store: &dyn Store) -> Result<(), Box<dyn std::error::Error>> {
    if store.count_posts(PostKind::Act).await? == 0 {
        seed_sample_acts(store).await;
    } else {
        tracing::info!("Acts already present, skipping sample data.");
    }
    Ok(())
}
