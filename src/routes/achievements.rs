//! HTTP routes for achievements
//!
//! - GET    /api/achievements      - List achievements in display order
//! - POST   /api/achievements      - Create an achievement
//! - PUT    /api/achievements/{id} - Partial update by record id
//! - DELETE /api/achievements/{id} - Delete by record id

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::db::schemas::{AchievementCreate, AchievementUpdate};
use crate::routes::helpers::{
    cors_preflight, detail_response, error_response, id_segment, json_response, message_response,
    method_not_allowed, parse_json_body, BoxBody,
};
use crate::server::AppState;

const BASE: &str = "/api/achievements";

/// Dispatch achievement routes. Returns `None` for paths outside this
/// family.
pub async fn handle_achievements_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();
    let method = req.method().clone();

    if path == BASE {
        return Some(match method {
            Method::GET => list_achievements(state).await,
            Method::POST => create_achievement(req, state).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    if let Some(id) = id_segment(&path, BASE) {
        return Some(match method {
            Method::PUT => update_achievement(req, state, id).await,
            Method::DELETE => delete_achievement(state, id).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    None
}

async fn list_achievements(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.list_achievements(state.owner()).await {
        Ok(achievements) => json_response(StatusCode::OK, &achievements),
        Err(e) => error_response(e),
    }
}

async fn create_achievement(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let create: AchievementCreate = match parse_json_body(req).await {
        Ok(c) => c,
        Err(e) => return error_response(e),
    };

    match state.service.create_achievement(state.owner(), create).await {
        Ok(achievement) => json_response(StatusCode::OK, &achievement),
        Err(e) => error_response(e),
    }
}

async fn update_achievement(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    id: &str,
) -> Response<BoxBody> {
    let updates: AchievementUpdate = match parse_json_body(req).await {
        Ok(u) => u,
        Err(e) => return error_response(e),
    };

    if updates.set_document().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "No updates provided");
    }

    match state.service.update_achievement(id, &updates).await {
        Ok(true) => message_response("Achievement updated successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Achievement not found"),
        Err(e) => error_response(e),
    }
}

async fn delete_achievement(state: Arc<AppState>, id: &str) -> Response<BoxBody> {
    match state.service.delete_achievement(id).await {
        Ok(true) => message_response("Achievement deleted successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Achievement not found"),
        Err(e) => error_response(e),
    }
}
