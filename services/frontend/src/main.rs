use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

mod client;
mod config;
mod error;
mod form;
mod format;
mod loader;
mod rich_text;
mod routes;
mod state;
mod views;

#[cfg(test)]
mod test_support;

use crate::{client::BackendClient, config::FrontendConfig, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    common::telemetry::init_tracing()?;

    info!("Starting frontend service");

    let config = FrontendConfig::from_env()?;
    let backend = BackendClient::new(&config.backend_url)?;
    info!("Using backend API at {}", config.backend_url);

    let app = routes::create_router(AppState { backend });

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    info!("Frontend service listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
