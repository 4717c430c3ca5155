//! HTTP routes for the portfolio document
//!
//! - GET /api/                   - API banner
//! - GET /api/portfolio          - Complete portfolio with all child lists
//! - PUT /api/portfolio/personal - Partial update of the personal section
//! - PUT /api/portfolio/about    - Partial update of the about section
//! - GET /api/export             - Complete portfolio under the export route

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::db::schemas::{AboutSectionUpdate, PersonalInfoUpdate};
use crate::routes::helpers::{
    cors_preflight, detail_response, error_response, json_response, message_response,
    method_not_allowed, parse_json_body, BoxBody,
};
use crate::server::AppState;

/// Dispatch portfolio-document routes. Returns `None` for paths this
/// family does not own so the caller can fall through.
pub async fn handle_portfolio_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();
    let method = req.method().clone();

    let known = matches!(
        path.as_str(),
        "/api" | "/api/" | "/api/portfolio" | "/api/portfolio/personal" | "/api/portfolio/about"
            | "/api/export"
    );
    if !known {
        return None;
    }

    if method == Method::OPTIONS {
        return Some(cors_preflight());
    }

    let response = match (&method, path.as_str()) {
        (&Method::GET, "/api") | (&Method::GET, "/api/") => {
            message_response("Portfolio API is running")
        }
        (&Method::GET, "/api/portfolio") => get_portfolio(state).await,
        (&Method::PUT, "/api/portfolio/personal") => update_personal(req, state).await,
        (&Method::PUT, "/api/portfolio/about") => update_about(req, state).await,
        (&Method::GET, "/api/export") => export_data(state).await,
        _ => method_not_allowed(),
    };

    Some(response)
}

/// GET /api/portfolio
async fn get_portfolio(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.get_portfolio(state.owner()).await {
        Ok(Some(portfolio)) => json_response(StatusCode::OK, &portfolio),
        Ok(None) => detail_response(StatusCode::NOT_FOUND, "Portfolio not found"),
        Err(e) => error_response(e),
    }
}

/// PUT /api/portfolio/personal
async fn update_personal(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let updates: PersonalInfoUpdate = match parse_json_body(req).await {
        Ok(u) => u,
        Err(e) => return error_response(e),
    };

    if updates.set_document().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "No updates provided");
    }

    match state.service.update_personal(state.owner(), &updates).await {
        Ok(true) => message_response("Personal information updated successfully"),
        Ok(false) => detail_response(StatusCode::BAD_REQUEST, "Portfolio not found"),
        Err(e) => error_response(e),
    }
}

/// PUT /api/portfolio/about
async fn update_about(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let updates: AboutSectionUpdate = match parse_json_body(req).await {
        Ok(u) => u,
        Err(e) => return error_response(e),
    };

    if updates.set_document().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "No updates provided");
    }

    match state.service.update_about(state.owner(), &updates).await {
        Ok(true) => message_response("About section updated successfully"),
        Ok(false) => detail_response(StatusCode::BAD_REQUEST, "Portfolio not found"),
        Err(e) => error_response(e),
    }
}

/// GET /api/export
async fn export_data(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.export_data(state.owner()).await {
        Ok(Some(data)) => json_response(StatusCode::OK, &data),
        Ok(None) => detail_response(StatusCode::NOT_FOUND, "No data found"),
        Err(e) => error_response(e),
    }
}
