//! Shared application state for the web server.

use std::sync::Arc;

use oncosym_model::Predictor;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub predictor: Arc<Predictor>,
}

impl AppState {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        Self { predictor }
    }
}

pub type SharedState = Arc<AppState>;
