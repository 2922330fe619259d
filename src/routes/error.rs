//! Route service errors.

use thiserror::Error;

/// Errors surfaced to route service callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// One or more required fields were missing or empty.
    #[error("Origem, destino e veículo são obrigatórios")]
    Validation { missing: Vec<&'static str> },

    /// The requested vehicle id is not in the catalog.
    #[error("Veículo não encontrado")]
    VehicleNotFound(String),

    /// No route is stored under the requested id.
    #[error("Rota não encontrada")]
    RouteNotFound(String),
}

impl RouteError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            RouteError::Validation { .. } => "validation",
            RouteError::VehicleNotFound(_) => "unknown_vehicle",
            RouteError::RouteNotFound(_) => "unknown_route",
        }
    }
}

/// Result type for route operations.
pub type RouteResult<T> = Result<T, RouteError>;
