//! Rota Certa: route alerts for truck drivers.
//!
//! A planner submits origin, destination and vehicle; the service evaluates
//! the static restriction catalog against that vehicle and the current time,
//! stores the resulting route and hands back a link the driver can open.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routes;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routes::RouteService;
