//! Mountable route groups.
//!
//! A [`RouteGroup`] is an externally owned set of handlers registered under a
//! common path prefix. The inner application only mounts groups; it never
//! inspects their internals, and errors inside a group belong to that group.
//! Adding a capability to the service means adding a new peer group here,
//! not editing an existing one.

pub mod process;
pub mod stream;

use crate::server::AppState;
use axum::Router;

pub use process::ProcessRoutes;
pub use stream::StreamRoutes;

/// The capability "exposes a mountable route group".
pub trait RouteGroup: Send + Sync {
    /// Path prefix the group is mounted under, e.g. `/process`.
    fn prefix(&self) -> &'static str;

    /// The group's routes, stateless until mounted into the application.
    fn routes(&self) -> Router<AppState>;
}

/// The groups the inner application ships with.
pub fn default_route_groups() -> Vec<Box<dyn RouteGroup>> {
    vec![Box::new(ProcessRoutes), Box::new(StreamRoutes)]
}
