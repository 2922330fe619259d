//! Typed HTTP client for the Rota Certa route service.

pub mod client;

pub use client::{
    Alert, ApiError, CreateRouteRequest, CreateRouteResponse, RotaClient, Route, Vehicle,
};
