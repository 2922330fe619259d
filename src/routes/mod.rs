//! Route service subsystem.
//!
//! # Data Flow
//! ```text
//! CreateRouteRequest
//!     → service.rs (validate, resolve vehicle)
//!     → analysis::evaluate (alerts for vehicle + local time)
//!     → id.rs (opaque shareable id)
//!     → store.rs (RouteStore::put)
//!     → CreateRouteResponse { routeId, shareLink, alertsCount, route }
//! ```
//!
//! # Design Decisions
//! - Create is the only mutator; routes are never updated or removed
//! - Validation and lookup happen before any store mutation
//! - Store is injected as a trait object so a persistent backend can replace it

pub mod error;
pub mod id;
pub mod service;
pub mod store;
pub mod types;

pub use error::{RouteError, RouteResult};
pub use service::RouteService;
pub use store::{InMemoryRouteStore, RouteStore};
pub use types::{CreateRouteRequest, CreateRouteResponse, Route, RouteStatus};
