// HTTP application composition: inner application and outer adapter

use super::handlers::{adapter_health_handler, health_handler};
use super::middleware::{permissive_cors, request_id_layers, restrictive_cors};
use crate::config::AppConfig;
use crate::error::Result;
use crate::routers::RouteGroup;
use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

/// Context shared with every handler. Carries the resolved credential path
/// explicitly so collaborators do not depend on the ambient environment.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub credential_path: Option<PathBuf>,
}

/// Build the fully configured inner application: restrictive CORS, the
/// mounted route groups, and the root liveness endpoint.
///
/// Callers construct this only after the lifecycle has reached `Ready`, so
/// no request is routed to any group before provisioning has succeeded.
pub fn inner_router(state: AppState, groups: &[Box<dyn RouteGroup>]) -> Result<Router> {
    let cors = restrictive_cors(&state.config.cors)?;

    let mut app = Router::new().route("/", get(health_handler));
    for group in groups {
        app = app.nest(group.prefix(), group.routes());
    }

    let app = app
        // JSON payloads only; nothing here moves large bodies
        .layer(tower_http::limit::RequestBodyLimitLayer::new(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(app)
}

/// Wrap the inner application in the outer adapter expected by a
/// request-per-invocation host.
///
/// The adapter owns exactly one route, its own liveness endpoint, and
/// delegates everything else to the inner application unprefixed. Its CORS
/// policy is deliberately broader than the inner one: at the host level the
/// narrower allow-list is redundant.
pub fn outer_router(inner: Router) -> Router {
    let (set_request_id, propagate_request_id) = request_id_layers();

    Router::new()
        .route("/api/health", get(adapter_health_handler))
        .fallback_service(inner)
        .layer(permissive_cors())
        .layer(propagate_request_id)
        .layer(set_request_id)
}
