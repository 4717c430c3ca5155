//! Legacy status check endpoints
//!
//! Liveness audit records kept for compatibility with early deployments:
//! clients post their name, reads return recent records. Unlike the
//! portfolio schemas, these documents keep snake_case field names on the
//! wire.
//!
//! - POST /api/status - Record a client status check
//! - GET  /api/status - List recent status checks

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::db::schemas::StatusCheckCreate;
use crate::routes::helpers::{
    cors_preflight, error_response, json_response, method_not_allowed, parse_json_body, BoxBody,
};
use crate::server::AppState;

/// Most records a single read returns
const STATUS_CHECK_LIMIT: i64 = 1000;

/// Dispatch status-check routes. Returns `None` for other paths.
pub async fn handle_status_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();

    if path != "/api/status" {
        return None;
    }

    let method = req.method().clone();
    Some(match method {
        Method::POST => create_status_check(req, state).await,
        Method::GET => list_status_checks(state).await,
        Method::OPTIONS => cors_preflight(),
        _ => method_not_allowed(),
    })
}

async fn create_status_check(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let create: StatusCheckCreate = match parse_json_body(req).await {
        Ok(c) => c,
        Err(e) => return error_response(e),
    };

    match state.service.create_status_check(create).await {
        Ok(check) => json_response(StatusCode::OK, &check),
        Err(e) => error_response(e),
    }
}

async fn list_status_checks(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.list_status_checks(STATUS_CHECK_LIMIT).await {
        Ok(checks) => json_response(StatusCode::OK, &checks),
        Err(e) => error_response(e),
    }
}
