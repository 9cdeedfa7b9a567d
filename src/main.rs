use anyhow::{Context, Result};
use sportsboard::{
    config::ServerConfig,
    logging,
    web::{self, SystemClock},
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) config + logging ─────────────────────────────────────────
    let config = ServerConfig::from_env()?;
    logging::init(&config.log_level);
    info!("startup");

    // ─── 2) routes ───────────────────────────────────────────────────
    let routes = web::routes(Arc::new(SystemClock));

    // ─── 3) serve until ctrl-c ───────────────────────────────────────
    let addr = config.socket_addr();
    let (bound, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            info!("shutdown requested");
        })
        .with_context(|| format!("binding {}", addr))?;

    info!("Server listening on http://{}", bound);
    info!("Sports tables: http://{}/api/sports-tables", bound);
    server.await;

    info!("all done");
    Ok(())
}
