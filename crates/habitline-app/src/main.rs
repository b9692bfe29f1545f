mod application;
mod presentation;

use std::path::PathBuf;

use presentation::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = PathBuf::from("logs");
    match habitline_infrastructure::logging::init_logger(log_dir.clone()) {
        Ok(_) => {
            tracing::info!("🚀 Habitline starting...");
            tracing::info!("📝 File logging initialized at: {}", log_dir.display());
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("   Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_target(true)
                .with_line_number(true)
                .try_init();
        }
    }

    let data_dir = std::env::current_dir()?;

    tracing::info!("🚀 Starting app state initialization...");
    let state = match AppState::new(&data_dir).await {
        Ok(state) => {
            tracing::info!("✅ App state initialized successfully");
            state
        }
        Err(e) => {
            tracing::error!("❌ Failed to initialize app state: {}", e);
            return Err(anyhow::anyhow!("{e}"));
        }
    };

    presentation::repl::run(&state).await?;

    state.services.scheduler.shutdown().await;
    tracing::info!("👋 Habitline stopped");

    Ok(())
}
