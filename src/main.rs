//! Hoopcast API server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hoopcast::classifier::Classifier;
use hoopcast::config::Config;
use hoopcast::dataset::ReferenceTable;
use hoopcast::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hoopcast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Hoopcast API starting...");

    // Load the two read-only components; either failing aborts startup.
    let table = ReferenceTable::load(&config.dataset_path)
        .with_context(|| format!("loading reference dataset {}", config.dataset_path.display()))?;
    tracing::info!("Reference table loaded: {} players", table.len());

    let classifier = Classifier::load(&config.model_path)
        .with_context(|| format!("loading classifier artifact {}", config.model_path.display()))?;
    tracing::info!("Classifier loaded: {} features", classifier.feature_count());

    // Build application state
    let state = AppState {
        table: Arc::new(table),
        classifier: Arc::new(classifier),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
