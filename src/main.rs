mod analysis;
mod api;
mod config;
mod glossary;
mod processing;
mod storage;

use crate::analysis::RuleSet;
use crate::api::AppState;
use crate::config::AppConfig;
use crate::storage::DocumentStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Mediclinic Dashboard API");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    info!("   - Uploads: {}", config.storage.upload_dir.display());

    // Initialize document storage
    info!("💾 Initializing document storage...");
    let store = Arc::new(DocumentStore::new(
        &config.storage.upload_dir,
        "/static/uploads",
    ));
    store.initialize()?;
    info!("✅ Document storage ready");

    // Lab rule table, built once and shared by reference
    let rules = Arc::new(RuleSet::default());

    let state = AppState { store, rules };

    // Build router with modular routes
    let app = api::router(state, &config.storage.static_dir)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start server
    let port = std::env::var("PORT").unwrap_or_else(|_| config.server.port.to_string());
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /health                            - Health check");
    info!("   GET  /demo/data                         - Demo patient data");
    info!("   POST /demo/analyze                      - Demo lab analysis");
    info!("   POST /api/explain                       - Explain medical text");
    info!("   POST /api/analyze/labs                  - Analyze lab results");
    info!("   POST /api/upload                        - Upload medical document");
    info!("   GET  /api/documents/:patient_id         - Patient documents");
    info!("   GET  /api/patient/:patient_id/summary   - Patient summary");
    info!("   GET  /api/chart                         - Chart data");
    info!("   POST /api/auth/login                    - Demo login");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
