//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, metrics)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use axum::{
    http::{header, HeaderValue, StatusCode},
    middleware,
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::pages::page_routes;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::observability::metrics;
use crate::routes::RouteService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RouteService>,
    /// Configured base URL for driver links.
    pub public_base_url: Option<String>,
    /// Fallback authority for driver links when a request has no Host header.
    pub bind_address: String,
}

/// HTTP server for the route alert service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server over an already-built route service.
    pub fn new(config: ServiceConfig, service: RouteService) -> Self {
        let state = AppState {
            service: Arc::new(service),
            public_base_url: config
                .share
                .public_base_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
            bind_address: config.listener.bind_address.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let public_dir = PathBuf::from(&config.static_files.public_dir);

        let api = Router::new()
            .route("/health", get(handlers::health))
            .route("/api/vehicles", get(handlers::list_vehicles))
            .route("/api/restrictions", get(handlers::list_restrictions))
            .route(
                "/api/routes",
                get(handlers::list_routes).post(handlers::create_route),
            )
            .route("/api/routes/{id}", get(handlers::get_route))
            .with_state(state);

        let mut router = api
            .merge(page_routes(&public_dir))
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                    .layer(TimeoutLayer::with_status_code(
                        StatusCode::REQUEST_TIMEOUT,
                        Duration::from_secs(config.timeouts.request_secs),
                    )),
            );

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ));
        }

        router
    }

    /// A clone of the fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            public_dir = %self.config.static_files.public_dir,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
