//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, share base URL)
//!     → handlers.rs (JSON API) | pages.rs (static files)
//!     → response.rs (error mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod pages;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer};
