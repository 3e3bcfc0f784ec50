//! Process signals that stop the server.
//!
//! Both SIGINT (ctrl-c) and SIGTERM trigger a graceful shutdown. A handler
//! that fails to install is logged and never fires; the other one still can.

use std::future::Future;
use std::io;
use std::time::Duration;

use tracing::error;

/// How long in-flight work gets to finish once a signal arrives.
pub const GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Which signal asked the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    Interrupt,
    Terminate,
}

/// Wait for SIGINT or SIGTERM, whichever comes first.
pub async fn signal() -> Shutdown {
    first_signal(tokio::signal::ctrl_c(), terminate()).await
}

/// Resolve with the first of two signal listeners to complete successfully.
pub async fn first_signal<I, T>(interrupt: I, terminate: T) -> Shutdown
where
    I: Future<Output = io::Result<()>>,
    T: Future<Output = io::Result<()>>,
{
    tokio::select! {
        kind = listen(interrupt, Shutdown::Interrupt) => kind,
        kind = listen(terminate, Shutdown::Terminate) => kind,
    }
}

async fn listen<F>(listener: F, kind: Shutdown) -> Shutdown
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = listener.await {
        error!(error = %e, ?kind, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    kind
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    signal(SignalKind::terminate())?.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    std::future::pending().await
}

#[cfg(test)]
#[path = "shutdown_test.rs"]
mod tests;
