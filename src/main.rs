mod config;
mod routes;
mod services;
mod shutdown;
mod state;

use std::sync::Arc;

use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let words = services::words::WordList::load(&config.words_file).expect("failed to load word list");
    tracing::info!(words = words.len(), file = %config.words_file.display(), "word list loaded");

    let state = state::AppState::new(words, config.protocol_version);

    // Spawn background liveness broadcaster.
    let hup = services::hup::spawn_hup_task(state.clone(), config.hup_interval);

    let app = routes::app(state, &config.static_dir);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, static_dir = %config.static_dir.display(), "fridge-poetry listening");
    let stop = Arc::new(Notify::new());
    let mut server = tokio::spawn({
        let stop = stop.clone();
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.notified().await })
                .await
        }
    });

    tokio::select! {
        signal = shutdown::signal() => {
            tracing::warn!(?signal, "shutdown requested, stopping tasks");
        }
        result = &mut server => {
            tracing::error!(?result, "server stopped unexpectedly");
            hup.abort();
            return;
        }
    }

    hup.abort();
    stop.notify_one();
    match tokio::time::timeout(shutdown::GRACE_PERIOD, server).await {
        Ok(Ok(Ok(()))) => tracing::info!("fridge-poetry stopped"),
        Ok(Ok(Err(e))) => tracing::error!(error = %e, "server failed during shutdown"),
        Ok(Err(e)) => tracing::error!(error = %e, "server task failed"),
        Err(_) => tracing::warn!(grace_secs = shutdown::GRACE_PERIOD.as_secs(), "shutdown timed out"),
    }
}
