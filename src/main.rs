use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::Config;
use activities::database::InMemoryActivityRepo;
use activities::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let repo = Arc::new(InMemoryActivityRepo::seeded());
    let state = AppState::new(repo, config.capacity);
    let app = web::build_router(state, &config.static_dir);

    let addr = config.bind_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        addr = %bound_addr,
        static_dir = %config.static_dir.display(),
        capacity = ?config.capacity,
        "activities server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("activities server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
