//! Request extractors for caller identity and public origin.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// Header set by the upstream identity proxy once the session is verified.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Missing or malformed identity → 401.
#[derive(Debug, Clone, Copy)]
pub struct OwnerId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .map(OwnerId)
            .ok_or(AppError::Unauthorized)
    }
}

/// Scheme + host the client used, e.g. `https://resumes.example.com`.
#[derive(Debug, Clone)]
pub struct RequestOrigin(pub String);

#[async_trait]
impl FromRequestParts<AppState> for RequestOrigin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(origin) = &state.config.public_origin {
            return Ok(RequestOrigin(origin.trim_end_matches('/').to_string()));
        }
        Ok(RequestOrigin(origin_from_headers(&parts.headers)))
    }
}

fn first_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Origin as reported by the client or the proxy chain. These headers are
/// caller-controlled, so deployments behind untrusted proxies must set
/// `PUBLIC_ORIGIN`, which makes `RequestOrigin` skip this entirely.
pub fn origin_from_headers(headers: &HeaderMap) -> String {
    let scheme = first_header_value(headers, "x-forwarded-proto").unwrap_or("http");
    let host = first_header_value(headers, "x-forwarded-host")
        .or_else(|| first_header_value(headers, "host"))
        .unwrap_or("localhost");
    format!("{scheme}://{host}")
}
