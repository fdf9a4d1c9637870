// Streaming route group, mounted under /stream

use super::RouteGroup;
use crate::server::AppState;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use futures::Stream;
use std::convert::Infallible;
use tracing::info;

pub struct StreamRoutes;

impl RouteGroup for StreamRoutes {
    fn prefix(&self) -> &'static str {
        "/stream"
    }

    fn routes(&self) -> Router<AppState> {
        Router::new().route("/", get(stream_handler))
    }
}

async fn stream_handler() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("Opening event stream");

    let stream = async_stream::stream! {
        yield Ok::<_, Infallible>(Event::default().event("ready").data("{}"));
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
