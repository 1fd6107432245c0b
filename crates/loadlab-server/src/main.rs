//! loadlab server binary.
//!
//! - Config: YAML from `LOADLAB_CONFIG` (default `loadlab.yaml`)
//! - Logging: `RUST_LOG`, defaults to `info`
//! - Shutdown: SIGINT/SIGTERM drains, then waits up to `server.shutdown_grace_ms`

use std::future::IntoFuture;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use loadlab_core::error::{LoadLabError, Result};
use loadlab_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(err = %e, "loadlab-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.server.listen_addr()?;
    let grace = cfg.server.shutdown_grace();

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| LoadLabError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "loadlab-server starting");

    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state.clone()))
        .into_future();
    let deadline = async {
        state.drained().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        res = serve => res.map_err(|e| LoadLabError::Internal(format!("server failed: {e}")))?,
        _ = deadline => tracing::warn!(grace_ms = grace.as_millis() as u64, "grace period elapsed, dropping in-flight requests"),
    }

    tracing::info!("loadlab-server stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %e, "ctrl-c handler failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(err = %e, "SIGTERM handler failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining");
    state.set_draining();
}
