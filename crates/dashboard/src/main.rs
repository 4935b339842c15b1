use anyhow::{Context, Result};
use dashboard::{handler::EventLoop, state::AppState};
use dotenv::dotenv;
use shared::{config::Config, utils::init_logger};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    init_logger(
        "dashboard",
        config.is_dev,
        config.enable_file_log,
        config.log_dir.as_deref(),
    );

    let state = AppState::new(&config).context("Failed to create AppState")?;

    info!("🚀 Dashboard shell started");

    EventLoop::serve(state, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("Event loop failed")?;

    info!("Shutting down dashboard shell...");

    Ok(())
}
