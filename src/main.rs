use anyhow::Context;
use clap::Parser;
use initiative_registry::config::Config;
use initiative_registry::logging::init_logging;
use initiative_registry::{router, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.log_level, config.log_json)?;

    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("creating data dir {}", config.data_dir.display()))?;

    let state = AppState::open(&config.data_dir, config.pretty(), config.write_mode())?;
    tracing::info!(
        initiatives = %state.initiatives.path().display(),
        users = %state.users.path().display(),
        mode = ?state.initiatives.write_mode(),
        "stores ready"
    );

    let app = router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
    }
}
