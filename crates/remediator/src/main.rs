use tracing::info;
use tracing_subscriber::EnvFilter;

use alert_remediator::{config::Config, server::Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("alert_remediator=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    let server = Server::from_config(&config);

    // Start server
    info!("Starting server on {}", config.server.addr);
    server.start(&config.server.addr).await?;

    Ok(())
}
