//! Interactive terminal predictor.
//!
//! Run with: cargo run -p oncosym-web --bin oncosym-predict

use std::io;

use tracing_subscriber::EnvFilter;

use oncosym_model::Predictor;
use oncosym_web::{cli, config::Config};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let (config, source) = Config::load()?;
    source.log();

    let predictor = Predictor::load_or_train(&config.model.settings())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run_session(&predictor, &mut stdin.lock(), &mut stdout.lock())
}
