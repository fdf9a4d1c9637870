//! Axum-based HTTP composition for the edgeserve bootstrap layer.
//!
//! Two applications are built here. The inner application carries the real
//! surface: a restrictive CORS allow-list, the mounted route groups, and a
//! root liveness endpoint. The outer adapter exists to satisfy hosts that
//! expect a single top-level application object: it mounts the inner
//! application at its root, answers one diagnostic endpoint itself, and
//! applies a permissive CORS policy for host-level exposure.
//!
//! # Components
//!
//! - `handlers`: Liveness endpoints for both levels.
//! - `middleware`: Request ID layers and the two CORS policies.
//! - `routes`: Router composition and the shared application state.

mod handlers;
mod middleware;
mod routes;

pub use routes::{inner_router, outer_router, AppState};
