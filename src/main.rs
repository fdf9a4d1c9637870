// edgeserve - Serverless-ready HTTP bootstrap with credential provisioning
//
// Local development entry point. Hosting environments that import the
// application as a library build the same routers via `edgeserve::server`;
// this binary is the thin launcher around them. Pair with `cargo watch -x
// run` for reload-on-change during development.

use anyhow::Result;
use clap::Parser;
use edgeserve::cli::Args;
use edgeserve::config::AppConfig;
use edgeserve::lifecycle::Lifecycle;
use edgeserve::routers::default_route_groups;
use edgeserve::server::{inner_router, outer_router, AppState};
use edgeserve::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting edgeserve v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Run startup provisioning. A failure here is fatal: the
    // process must not start serving with a half-configured credential
    // state.
    let mut lifecycle = Lifecycle::new(config.credentials.clone());
    let credential_path = lifecycle.start()?.cloned();

    // Phase 4: Compose the inner application and wrap it in the outer
    // adapter, only now that provisioning has completed.
    let state = AppState {
        config: config.clone(),
        credential_path,
    };
    let groups = default_route_groups();
    let inner = inner_router(state, &groups)?;
    let app = outer_router(inner);

    // Phase 5: Serve with graceful shutdown
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Phase 6: Run teardown exactly once after the server has drained
    lifecycle.shutdown()?;
    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
