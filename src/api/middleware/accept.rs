//! Accept header normalization for the RPC transport

use axum::{
    body::Body,
    http::{header::ACCEPT, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};

pub const APPLICATION_JSON: &str = "application/json";

/// Rewrites `Accept: */*` to `Accept: application/json`.
///
/// The RPC handler only answers clients that accept JSON; generic clients
/// such as curl send the wildcard.
pub async fn normalize_accept_middleware(mut request: Request<Body>, next: Next) -> Response {
    normalize_accept(request.headers_mut());
    next.run(request).await
}

fn normalize_accept(headers: &mut HeaderMap) {
    let is_wildcard = headers
        .get(ACCEPT)
        .is_some_and(|value| value.as_bytes() == b"*/*");

    if is_wildcard {
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    }
}

/// True when the Accept header is missing or lists `application/json`
pub fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(ACCEPT) else {
        return true;
    };

    value
        .to_str()
        .map(|accept| {
            accept.split(',').any(|media_range| {
                media_range
                    .split(';')
                    .next()
                    .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(APPLICATION_JSON))
            })
        })
        .unwrap_or(false)
}
