//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo for async handling: one spawned task per
//! connection, one route family per request. The family dispatchers own
//! their sub-paths; anything unclaimed falls through to a 404 with the
//! offending path in the body.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Args;
use crate::db::MongoClient;
use crate::routes;
use crate::services::PortfolioService;
use crate::types::VitrineError;

type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// Shared application state
pub struct AppState {
    pub args: Args,
    pub mongo: MongoClient,
    pub service: PortfolioService,
}

impl AppState {
    /// Owner key every portfolio route operates on
    pub fn owner(&self) -> &str {
        &self.args.portfolio_owner
    }
}

/// Accept loop: serve connections until the process is stopped
pub async fn run(state: Arc<AppState>) -> Result<(), VitrineError> {
    let listener = TcpListener::bind(state.args.listen).await?;

    info!(
        "Vitrine listening on {} serving portfolio '{}'",
        state.args.listen, state.args.portfolio_owner
    );

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new()
                        .preserve_header_case(true)
                        .title_case_headers(true)
                        .serve_connection(io, service)
                        .await
                    {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> Result<Response<BoxBody>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", addr, method, path);

    if path == "/api" || path.starts_with("/api/") {
        let response = match dispatch_api(req, Arc::clone(&state), &path).await {
            Some(response) => response,
            None if method == Method::OPTIONS => to_boxed(preflight_response()),
            None => to_boxed(not_found_response(&path)),
        };
        return Ok(response);
    }

    let response = match (method, path.as_str()) {
        // Liveness probe - returns 200 if the service is running
        (Method::GET, "/health") | (Method::GET, "/healthz") => {
            to_boxed(routes::health_check(Arc::clone(&state)))
        }

        // Version info for deployment verification
        (Method::GET, "/version") => to_boxed(routes::version_info()),

        // CORS preflight
        (Method::OPTIONS, _) => to_boxed(preflight_response()),

        _ => to_boxed(not_found_response(&path)),
    };

    Ok(response)
}

/// Pick the route family that owns an /api path and hand it the request.
///
/// Each family consumes the request, so exactly one is chosen by path
/// prefix. A family may still return `None` for sub-paths it recognizes
/// as malformed; those fall back to the caller's 404.
async fn dispatch_api(
    req: Request<Incoming>,
    state: Arc<AppState>,
    path: &str,
) -> Option<Response<BoxBody>> {
    if path == "/api"
        || path == "/api/"
        || path == "/api/portfolio"
        || path.starts_with("/api/portfolio/")
        || path == "/api/export"
    {
        return routes::handle_portfolio_request(req, state).await;
    }
    if path == "/api/skills" || path.starts_with("/api/skills/") {
        return routes::handle_skills_request(req, state).await;
    }
    if path == "/api/experience" || path.starts_with("/api/experience/") {
        return routes::handle_experience_request(req, state).await;
    }
    if path == "/api/projects" || path.starts_with("/api/projects/") {
        return routes::handle_projects_request(req, state).await;
    }
    if path == "/api/achievements" || path.starts_with("/api/achievements/") {
        return routes::handle_achievements_request(req, state).await;
    }
    if path == "/api/publications" || path.starts_with("/api/publications/") {
        return routes::handle_publications_request(req, state).await;
    }
    if path == "/api/migrate" {
        return routes::handle_migrate_request(req, state).await;
    }
    if path == "/api/status" {
        return routes::handle_status_request(req, state).await;
    }

    None
}

/// Convert a Full<Bytes> body to BoxBody
fn to_boxed(response: Response<Full<Bytes>>) -> Response<BoxBody> {
    response.map(|body| body.map_err(|never| match never {}).boxed())
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "detail": format!("Not found: {}", path)
    });

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}
