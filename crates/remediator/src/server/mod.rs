mod receivers;
mod routes;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    remediation::{CommandExecutor, RemediationExecutor},
    Result,
};

pub use receivers::{AlertStatus, Notification};

pub struct Server {
    executor: Arc<dyn RemediationExecutor>,
    // Held while a request runs its remediations, so runs never overlap.
    remediation_lock: Mutex<()>,
}

impl Server {
    pub fn new(_config: &Config, executor: Arc<dyn RemediationExecutor>) -> Self {
        Self {
            executor,
            remediation_lock: Mutex::new(()),
        }
    }

    /// Server running the configured remediation command
    pub fn from_config(config: &Config) -> Self {
        let executor = Arc::new(CommandExecutor::from(&config.remediation));
        info!("Firing alerts will run: {}", executor.describe());
        Self::new(config, executor)
    }

    pub fn build_router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/", post(routes::webhook))
            .route("/health", get(routes::health))
            .route("/metrics", get(routes::export_metrics))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(DefaultBodyLimit::disable()),
            )
            .with_state(state)
    }

    pub async fn start(self, addr: &str) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.build_router()).await?;
        Ok(())
    }
}
