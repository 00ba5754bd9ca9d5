//! WebSocket change feed
//!
//! Streams every store mutation to connected clients as JSON-encoded
//! [`EventEnvelope`](crate::core::events::EventEnvelope)s. Clients keeping
//! a local snapshot apply the events to it; there is no subscription
//! protocol — connecting means subscribing to everything.

use crate::server::host::ServerHost;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures::StreamExt;
use std::sync::Arc;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

pub fn routes() -> Router<Arc<ServerHost>> {
    Router::new().route("/feed", get(feed_handler))
}

/// GET /api/feed — upgrade to a WebSocket and stream change events
async fn feed_handler(
    ws: WebSocketUpgrade,
    State(host): State<Arc<ServerHost>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| stream_changes(socket, host))
}

async fn stream_changes(mut socket: WebSocket, host: Arc<ServerHost>) {
    let Some(bus) = host.event_bus() else {
        tracing::warn!(
            "change feed requested but no event bus is configured; \
             use ServerBuilder::with_event_bus() to enable it"
        );
        let _ = socket.send(Message::Close(None)).await;
        return;
    };

    tracing::debug!("change feed client connected");
    let mut events = BroadcastStream::new(bus.subscribe());

    while let Some(item) = events.next().await {
        match item {
            Ok(envelope) => match serde_json::to_string(&envelope) {
                Ok(json) => {
                    if socket.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to serialize change envelope");
                }
            },
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "change feed subscriber lagged, events dropped");
            }
        }
    }

    tracing::debug!("change feed client disconnected");
}
