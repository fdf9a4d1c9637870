// Processing route group, mounted under /process

use super::RouteGroup;
use crate::server::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub struct ProcessRoutes;

impl RouteGroup for ProcessRoutes {
    fn prefix(&self) -> &'static str {
        "/process"
    }

    fn routes(&self) -> Router<AppState> {
        Router::new().route("/", post(process_handler))
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessAck {
    pub accepted: bool,
    pub input: String,
}

async fn process_handler(
    State(state): State<AppState>,
    Json(req): Json<ProcessRequest>,
) -> Json<ProcessAck> {
    info!("Received process request ({} bytes)", req.input.len());
    // The credential path travels in application state rather than being
    // re-read from the ambient environment.
    debug!(
        "Credentials provisioned: {}",
        state.credential_path.is_some()
    );

    Json(ProcessAck {
        accepted: true,
        input: req.input,
    })
}
