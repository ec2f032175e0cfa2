//! HTTP server initialization and runtime setup.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::MemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The registry starts empty on every boot: state is in-memory only, and a
/// restart clears all encodings.
///
/// # Errors
///
/// Returns an error if the listen address fails to parse, the bind fails, or
/// a server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryUrlRepository::new());
    let shortener = Arc::new(ShortenerService::new(
        repository,
        config.domain_prefix.clone(),
        config.code_length,
    ));

    let state = AppState::new(shortener);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }

    tracing::info!("Shutdown signal received");
}
