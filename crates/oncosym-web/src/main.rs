//! Oncosym Web Server
//!
//! Run with: cargo run -p oncosym-web --bin oncosym

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use oncosym_model::Predictor;
use oncosym_web::{config::Config, router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (config, source) = Config::load()?;

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();
    source.log();

    info!("Oncosym starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "Model: artifacts in {}, {} samples, seed {}",
        config.model.artifact_dir, config.model.num_samples, config.model.seed
    );

    // Training is CPU-bound; keep it off the async workers.
    let settings = config.model.settings();
    let predictor = tokio::task::spawn_blocking(move || Predictor::load_or_train(&settings)).await??;
    info!("Model ready: {} cancer types", predictor.class_names().len());

    let state = AppState::new(Arc::new(predictor));
    let router = build_router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{}", bind_addr);
    info!("   Health:   http://{}/health", bind_addr);
    info!("   Predict:  POST http://{}/predict", bind_addr);
    info!("   Symptoms: http://{}/symptoms", bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
