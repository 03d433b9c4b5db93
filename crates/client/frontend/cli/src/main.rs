//! Terminal client entry point.
mod app;
mod console;
mod input;
mod presentation;

use std::path::Path;

use anyhow::{Context, Result};
use app::App;
use arena_runtime::{GameSession, RuntimeConfig};
use console::Console;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    setup_logging(&config.log_dir)?;

    let session = GameSession::from_config(&config).context("failed to prepare game session")?;
    App::new(session, Console::stdio()).run()
}

/// Diagnostics go to a daily file so the menus stay readable.
fn setup_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "arena.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(_guard);

    tracing::info!("Logging initialized: {}/arena.log", log_dir.display());

    Ok(())
}
