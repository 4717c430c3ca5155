//! HTTP routes for publications
//!
//! - GET    /api/publications      - List publications in display order
//! - POST   /api/publications      - Create a publication
//! - PUT    /api/publications/{id} - Partial update by record id
//! - DELETE /api/publications/{id} - Delete by record id

use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;

use crate::db::schemas::{PublicationCreate, PublicationUpdate};
use crate::routes::helpers::{
    cors_preflight, detail_response, error_response, id_segment, json_response, message_response,
    method_not_allowed, parse_json_body, BoxBody,
};
use crate::server::AppState;

const BASE: &str = "/api/publications";

/// Dispatch publication routes. Returns `None` for paths outside this
/// family.
pub async fn handle_publications_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Option<Response<BoxBody>> {
    let path = req.uri().path();
    let path = path.split('?').next().unwrap_or(path).to_string();
    let method = req.method().clone();

    if path == BASE {
        return Some(match method {
            Method::GET => list_publications(state).await,
            Method::POST => create_publication(req, state).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    if let Some(id) = id_segment(&path, BASE) {
        return Some(match method {
            Method::PUT => update_publication(req, state, id).await,
            Method::DELETE => delete_publication(state, id).await,
            Method::OPTIONS => cors_preflight(),
            _ => method_not_allowed(),
        });
    }

    None
}

async fn list_publications(state: Arc<AppState>) -> Response<BoxBody> {
    match state.service.list_publications(state.owner()).await {
        Ok(publications) => json_response(StatusCode::OK, &publications),
        Err(e) => error_response(e),
    }
}

async fn create_publication(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    let create: PublicationCreate = match parse_json_body(req).await {
        Ok(c) => c,
        Err(e) => return error_response(e),
    };

    match state.service.create_publication(state.owner(), create).await {
        Ok(publication) => json_response(StatusCode::OK, &publication),
        Err(e) => error_response(e),
    }
}

async fn update_publication(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    id: &str,
) -> Response<BoxBody> {
    let updates: PublicationUpdate = match parse_json_body(req).await {
        Ok(u) => u,
        Err(e) => return error_response(e),
    };

    if updates.set_document().is_empty() {
        return detail_response(StatusCode::BAD_REQUEST, "No updates provided");
    }

    match state.service.update_publication(id, &updates).await {
        Ok(true) => message_response("Publication updated successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Publication not found"),
        Err(e) => error_response(e),
    }
}

async fn delete_publication(state: Arc<AppState>, id: &str) -> Response<BoxBody> {
    match state.service.delete_publication(id).await {
        Ok(true) => message_response("Publication deleted successfully"),
        Ok(false) => detail_response(StatusCode::NOT_FOUND, "Publication not found"),
        Err(e) => error_response(e),
    }
}
