//! Route creation and lookup.

use chrono::{DateTime, Local, Utc};
use std::sync::Arc;

use crate::analysis::{evaluate, EvaluationTime};
use crate::dataset::{Dataset, Restriction, Vehicle};
use crate::observability::metrics;
use crate::routes::error::{RouteError, RouteResult};
use crate::routes::id::generate_route_id;
use crate::routes::store::{InMemoryRouteStore, RouteStore};
use crate::routes::types::{CreateRouteRequest, CreateRouteResponse, Route, RouteStatus};

/// Validates planner requests, evaluates restrictions and stores routes.
#[derive(Clone)]
pub struct RouteService {
    dataset: Arc<Dataset>,
    store: Arc<dyn RouteStore>,
}

impl RouteService {
    pub fn new(dataset: Arc<Dataset>, store: Arc<dyn RouteStore>) -> Self {
        Self { dataset, store }
    }

    /// Service over `dataset` with a fresh in-memory store.
    pub fn in_memory(dataset: Dataset) -> Self {
        Self::new(Arc::new(dataset), Arc::new(InMemoryRouteStore::new()))
    }

    /// The static vehicle catalog.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.dataset.vehicles
    }

    /// The static restriction catalog.
    pub fn restrictions(&self) -> &[Restriction] {
        &self.dataset.restrictions
    }

    /// Create a route evaluated at the current local time.
    ///
    /// `share_base` is the scheme and authority the driver link is built on,
    /// e.g. `http://localhost:3000`.
    pub fn create_route(
        &self,
        request: CreateRouteRequest,
        share_base: &str,
    ) -> RouteResult<CreateRouteResponse> {
        self.create_route_at(request, share_base, Local::now())
    }

    /// Create a route as if the current time were `now`.
    ///
    /// Nothing is stored unless the whole request succeeds.
    pub fn create_route_at(
        &self,
        request: CreateRouteRequest,
        share_base: &str,
        now: DateTime<Local>,
    ) -> RouteResult<CreateRouteResponse> {
        let result = self.build_route(request, now);
        let route = match result {
            Ok(route) => route,
            Err(e) => {
                tracing::warn!(reason = e.reason(), error = %e, "Route creation rejected");
                metrics::record_route_rejected(e.reason());
                return Err(e);
            }
        };

        let route_id = route.id.clone();
        let alerts_count = route.alerts.len();
        self.store.put(route.clone());

        metrics::record_route_created(alerts_count);
        metrics::record_store_size(self.store.len());
        tracing::info!(
            route_id = %route_id,
            vehicle = %route.vehicle.id,
            alerts = alerts_count,
            "Route created"
        );

        Ok(CreateRouteResponse {
            success: true,
            share_link: share_link(share_base, &route_id),
            route_id,
            alerts_count,
            route,
        })
    }

    fn build_route(&self, request: CreateRouteRequest, now: DateTime<Local>) -> RouteResult<Route> {
        let mut missing = Vec::new();
        let origin = required(request.origin, "origin", &mut missing);
        let destination = required(request.destination, "destination", &mut missing);
        let vehicle_id = required(request.vehicle_id, "vehicleId", &mut missing);
        if !missing.is_empty() {
            return Err(RouteError::Validation { missing });
        }

        let vehicle = self
            .dataset
            .find_vehicle(&vehicle_id)
            .cloned()
            .ok_or(RouteError::VehicleNotFound(vehicle_id))?;

        let alerts = evaluate(
            &vehicle,
            &self.dataset.restrictions,
            EvaluationTime::from_datetime(&now),
        );

        Ok(Route {
            id: generate_route_id(),
            origin,
            destination,
            vehicle,
            vehicle_plate: request.vehicle_plate.unwrap_or_default(),
            driver_name: request.driver_name.unwrap_or_default(),
            notes: request.notes.unwrap_or_default(),
            alerts,
            created_at: now.with_timezone(&Utc),
            status: RouteStatus::Pending,
        })
    }

    /// Look up a stored route.
    pub fn get_route(&self, id: &str) -> RouteResult<Route> {
        self.store
            .get(id)
            .ok_or_else(|| RouteError::RouteNotFound(id.to_string()))
    }

    /// All stored routes, newest first.
    pub fn list_routes(&self) -> Vec<Route> {
        self.store.list()
    }
}

/// Value of a required field as sent, recording `name` when absent or blank.
fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

/// Driver-facing link for a route.
pub fn share_link(base: &str, route_id: &str) -> String {
    format!("{}/rota/{}", base.trim_end_matches('/'), route_id)
}
