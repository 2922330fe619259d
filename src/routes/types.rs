//! Route records and the create-route request/response payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::Alert;
use crate::dataset::Vehicle;

/// Lifecycle status of a route. Routes never leave `Pending` for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    #[default]
    Pending,
}

/// A planned trip plus the alerts computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Opaque id, also the path segment of the driver link.
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Snapshot of the vehicle at creation time.
    pub vehicle: Vehicle,
    pub vehicle_plate: String,
    pub driver_name: String,
    pub notes: String,
    /// Sorted by severity, most severe first.
    pub alerts: Vec<Alert>,
    pub created_at: DateTime<Utc>,
    pub status: RouteStatus,
}

/// Payload of `POST /api/routes`.
///
/// Every field is optional at the wire level so that missing fields surface
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRouteRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub vehicle_id: Option<String>,
    pub vehicle_plate: Option<String>,
    pub driver_name: Option<String>,
    pub notes: Option<String>,
}

/// Response of a successful route creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteResponse {
    pub success: bool,
    pub route_id: String,
    pub share_link: String,
    pub alerts_count: usize,
    pub route: Route,
}
