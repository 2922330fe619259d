use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use crate::dataset::{Restriction, Vehicle};
use crate::http::request::{base_url_from_host, request_id};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::routes::{CreateRouteRequest, CreateRouteResponse, Route, RouteError};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    Json(state.service.vehicles().to_vec())
}

pub async fn list_restrictions(State(state): State<AppState>) -> Json<Vec<Restriction>> {
    Json(state.service.restrictions().to_vec())
}

pub async fn create_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> Result<Json<CreateRouteResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::BytesRejection(rejection)) => {
            tracing::warn!(
                request_id = %request_id(&headers),
                error = %rejection,
                "Failed to read route payload"
            );
            return Err(ApiError::Body(JsonRejection::BytesRejection(rejection)));
        }
        Err(rejection) => {
            // Unparsable bodies are reported like missing fields
            tracing::debug!(
                request_id = %request_id(&headers),
                error = %rejection,
                "Rejected route payload"
            );
            return Err(RouteError::Validation {
                missing: vec!["origin", "destination", "vehicleId"],
            }
            .into());
        }
    };

    let base = state.share_base(&headers);
    let response = state.service.create_route(request, &base)?;
    Ok(Json(response))
}

pub async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Route>, ApiError> {
    Ok(Json(state.service.get_route(&id)?))
}

pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<Route>> {
    Json(state.service.list_routes())
}

impl AppState {
    /// Base URL driver links are built on: the configured public URL, else
    /// the Host the request arrived on, else the bind address.
    pub fn share_base(&self, headers: &HeaderMap) -> String {
        self.public_base_url
            .clone()
            .or_else(|| base_url_from_host(headers))
            .unwrap_or_else(|| format!("http://{}", self.bind_address))
    }
}
