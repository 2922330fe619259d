//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the dataset
//! - Start the metrics exporter
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::dataset::{load_dataset, DatasetError};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::routes::RouteService;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Build the HTTP server for `config`, loading its dataset from disk.
pub fn build_server(config: ServiceConfig) -> Result<HttpServer, StartupError> {
    let dataset = load_dataset(Path::new(&config.dataset.path))?;
    let service = RouteService::in_memory(dataset);
    Ok(HttpServer::new(config, service))
}

/// Start every subsystem and serve until `shutdown` fires.
pub async fn run(config: ServiceConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        dataset = %config.dataset.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = build_server(config.clone())?;

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
