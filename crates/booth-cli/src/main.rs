//! Transporter booth console entry point.

use std::sync::Arc;

use booth_cli::config::AppConfig;
use booth_cli::dispatch::{Outcome, dispatch};
use booth_cli::error::AppError;
use booth_cli::state::AppState;
use booth_world::scheduler::TokioScheduler;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber. Player text owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting transporter booth");

    let config = AppConfig::from_env()?;
    let state = AppState::build(
        &config,
        Box::new(std::io::stdout()),
        Arc::new(TokioScheduler::current()),
    )
    .await?;
    tracing::info!(
        start = %state.start,
        destinations = state.coordinator.registry().len(),
        stage_unit_ms = config.transport.stage_unit_ms,
        "booth ready"
    );

    dispatch(&state, "buttons").await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if dispatch(&state, &line).await == Outcome::Quit {
            break;
        }
    }

    tracing::info!("Leaving transporter booth");
    Ok(())
}
