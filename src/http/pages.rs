//! Static planner and driver pages.
//!
//! `/` serves the planner page and `/rota/{id}` the driver page; the driver
//! page reads the id from its own URL and fetches `/api/routes/{id}`.
//! Any other path is looked up in the public directory.

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub const PLANNER_PAGE: &str = "index.html";
pub const DRIVER_PAGE: &str = "rota.html";

/// Routes serving files from `public_dir` verbatim.
pub fn page_routes<S>(public_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route_service("/", ServeFile::new(public_dir.join(PLANNER_PAGE)))
        .route_service("/rota/{id}", ServeFile::new(public_dir.join(DRIVER_PAGE)))
        .fallback_service(ServeDir::new(public_dir))
}
