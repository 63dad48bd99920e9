use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use common::{config::ServerConfig, telemetry};

mod dice;
mod routes;

/// Port used when `PORT` is not set
const DEFAULT_PORT: u16 = 8333;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing()?;

    info!("Starting auth service");

    let config = ServerConfig::from_env(DEFAULT_PORT)?;

    let app = routes::create_router();

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(
        "Listening for requests on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
