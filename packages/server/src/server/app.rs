//! Application setup and router configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ModelGateway;
use crate::server::routes::{
    health_handler, root_handler, scan_email_handler, scan_link_handler, scan_phone_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ModelGateway>,
}

/// Build the Axum application router.
///
/// The gateway is injected so tests can substitute a deterministic stub
/// for the Anthropic-backed implementation.
pub fn build_app(gateway: Arc<dyn ModelGateway>, allowed_origin: &str) -> Result<Router> {
    let state = AppState { gateway };

    // CORS: a single fixed development origin, credentials allowed
    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("Invalid allowed origin: {allowed_origin}"))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    let scanner_routes = Router::new()
        .route("/scan/email", post(scan_email_handler))
        .route("/scan/link", post(scan_link_handler))
        .route("/scan/phone", post(scan_phone_handler));

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api", scanner_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
