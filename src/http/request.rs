//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Echo the ID back on the response
//! - Work out the public base URL a request arrived on
//!
//! # Design Decisions
//! - Request ID added as early as possible so trace spans carry it

use axum::http::{header, HeaderMap, HeaderName, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Request ID of a request, or `"unknown"` before the ID layer ran.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// `http://{host}` taken from the Host header, if the request has one.
pub fn base_url_from_host(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .filter(|h| !h.is_empty())
        .map(|h| format!("http://{}", h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_generated_ids_are_uuids() {
        let req = Request::builder().body(()).unwrap();
        let id = MakeRequestUuidV4.make_request_id(&req).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(value).is_ok());
    }

    #[test]
    fn test_base_url_from_host() {
        let mut headers = HeaderMap::new();
        assert_eq!(base_url_from_host(&headers), None);

        headers.insert(header::HOST, HeaderValue::from_static("rotas.local:3000"));
        assert_eq!(
            base_url_from_host(&headers).as_deref(),
            Some("http://rotas.local:3000")
        );
    }

    #[test]
    fn test_request_id_fallback() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_id(&headers), "unknown");
        headers.insert(X_REQUEST_ID, HeaderValue::from_static("abc"));
        assert_eq!(request_id(&headers), "abc");
    }
}
