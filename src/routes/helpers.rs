//! Shared response and body helpers for the route handlers
//!
//! Every JSON response carries permissive CORS headers; error bodies are
//! `{"detail": "..."}` and confirmations are `{"message": "..."}`.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Request, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{Result, VitrineError};

pub(crate) type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// Cap for ordinary JSON request bodies
pub(crate) const DEFAULT_BODY_LIMIT: usize = 10_240;

/// Seed payloads carry a whole portfolio, so the migration route accepts
/// considerably more than the default
pub(crate) const MIGRATE_BODY_LIMIT: usize = 1_048_576;

#[derive(Serialize)]
struct DetailBody {
    detail: String,
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<BoxBody> {
    let json = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
        .body(full_body(json))
        .unwrap()
}

/// Error payload in the `{"detail": "..."}` shape
pub(crate) fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response<BoxBody> {
    json_response(
        status,
        &DetailBody {
            detail: detail.into(),
        },
    )
}

/// 200 confirmation in the `{"message": "..."}` shape
pub(crate) fn message_response(message: impl Into<String>) -> Response<BoxBody> {
    json_response(
        StatusCode::OK,
        &MessageBody {
            message: message.into(),
        },
    )
}

/// Map a service error onto its HTTP status and detail body
pub(crate) fn error_response(err: VitrineError) -> Response<BoxBody> {
    let (status, detail) = err.into_status_code_and_body();
    detail_response(status, detail)
}

pub(crate) fn method_not_allowed() -> Response<BoxBody> {
    detail_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

pub(crate) fn cors_preflight() -> Response<BoxBody> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type, Authorization")
        .header("Access-Control-Max-Age", "86400")
        .body(empty_body())
        .unwrap()
}

pub(crate) fn full_body(data: impl Into<Bytes>) -> BoxBody {
    Full::new(data.into())
        .map_err(|never| match never {})
        .boxed()
}

pub(crate) fn empty_body() -> BoxBody {
    Full::new(Bytes::new())
        .map_err(|never| match never {})
        .boxed()
}

pub(crate) async fn parse_json_body<T: for<'de> Deserialize<'de>>(
    req: Request<hyper::body::Incoming>,
) -> Result<T> {
    parse_json_body_with_limit(req, DEFAULT_BODY_LIMIT).await
}

pub(crate) async fn parse_json_body_with_limit<T: for<'de> Deserialize<'de>>(
    req: Request<hyper::body::Incoming>,
    limit: usize,
) -> Result<T> {
    let body = req.collect().await.map_err(|e| {
        warn!("Request body read error: {}", e);
        VitrineError::Http(format!("Failed to read body: {}", e))
    })?;

    let bytes = body.to_bytes();
    if bytes.len() > limit {
        warn!("Request body too large: {} bytes (limit {})", bytes.len(), limit);
        return Err(VitrineError::Http("Request body too large".into()));
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        warn!("Request body parse error: {}", e);
        VitrineError::from(e)
    })
}

/// Extract the trailing id segment from `/<base>/{id}` paths.
///
/// Returns `None` for the bare base path, a trailing slash with no id, or
/// deeper nesting.
pub(crate) fn id_segment<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base)?.strip_prefix('/')?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_segment_extracts_single_segment() {
        assert_eq!(id_segment("/api/skills/abc-123", "/api/skills"), Some("abc-123"));
        assert_eq!(id_segment("/api/skills", "/api/skills"), None);
        assert_eq!(id_segment("/api/skills/", "/api/skills"), None);
        assert_eq!(id_segment("/api/skills/a/b", "/api/skills"), None);
        assert_eq!(id_segment("/api/projects/x", "/api/skills"), None);
    }

    #[test]
    fn test_detail_response_status() {
        let res = detail_response(StatusCode::NOT_FOUND, "Portfolio not found");
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            res.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }

    #[test]
    fn test_error_response_maps_unprocessable() {
        let err = VitrineError::Unprocessable("bad payload".into());
        let res = error_response(err);
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
