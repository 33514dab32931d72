//! Client IP extraction
//!
//! Visits record the client address for marketing attribution. The service
//! normally sits behind a reverse proxy, so the forwarded headers take
//! priority over the socket peer address.

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;

/// First entry of `X-Forwarded-For`, or `X-Real-IP`
pub fn extract_forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
}

/// Forwarded header if present, otherwise the socket peer address
pub fn extract_client_ip(req: &HttpRequest) -> Option<String> {
    extract_forwarded_ip(req.headers())
        .or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
}
