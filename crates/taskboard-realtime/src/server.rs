use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use futures_util::{stream::SplitSink, stream::SplitStream, SinkExt, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::TaskboardResult;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::hub::{CommentHub, PeerId};
use crate::wire::{self, ClientEvent, ServerEvent};

/// Route the comment socket is mounted on.
pub const SOCKET_PATH: &str = "/socket";

const PING_INTERVAL: Duration = Duration::from_secs(30);
const PONG_TIMEOUT: Duration = Duration::from_secs(60);

pub fn build_router(hub: CommentHub) -> Router {
    Router::new()
        .route(SOCKET_PATH, get(ws_handler))
        .route("/health", get(|| async { "ok" }))
        .with_state(hub)
}

/// Serves the comment socket on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    hub: CommentHub,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> TaskboardResult<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Comment socket listening on ws://{}{}", addr, SOCKET_PATH);
    axum::serve(listener, build_router(hub))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("Comment socket shut down");
    Ok(())
}

async fn ws_handler(ws: WebSocketUpgrade, State(hub): State<CommentHub>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

async fn handle_socket(socket: WebSocket, hub: CommentHub) {
    let (sender, receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel::<ServerEvent>();
    let peer = hub.join(Arc::new(tx));
    run_socket_loop(&hub, peer, sender, receiver, rx).await;
    hub.leave(peer);
}

/// Forwards hub events to the socket, feeds client frames into the hub and
/// keeps the connection alive with pings. A peer that misses a pong for
/// [`PONG_TIMEOUT`] is dropped.
async fn run_socket_loop(
    hub: &CommentHub,
    peer: PeerId,
    mut sender: SplitSink<WebSocket, Message>,
    mut receiver: SplitStream<WebSocket>,
    mut rx: mpsc::UnboundedReceiver<ServerEvent>,
) {
    let mut ping_interval = tokio::time::interval(PING_INTERVAL);
    ping_interval.tick().await;

    let mut last_pong = Instant::now();
    let mut awaiting_pong = false;

    loop {
        tokio::select! {
            _ = ping_interval.tick() => {
                if awaiting_pong && last_pong.elapsed() > PONG_TIMEOUT {
                    tracing::debug!("Peer {} timed out", peer);
                    break;
                }
                if sender.send(Message::Ping(Vec::new().into())).await.is_err() {
                    break;
                }
                awaiting_pong = true;
            }

            event = rx.recv() => {
                let Some(event) = event else { break };
                let text = match wire::encode(&event) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!("Failed to encode event for peer {}: {}", peer, e);
                        continue;
                    }
                };
                if sender.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }

            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match wire::decode::<ClientEvent>(text.as_str()) {
                            Ok(event) => {
                                hub.handle(peer, event);
                            }
                            Err(e) => tracing::warn!("Ignoring frame from peer {}: {}", peer, e),
                        }
                    }
                    Some(Ok(Message::Pong(_))) => {
                        last_pong = Instant::now();
                        awaiting_pong = false;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                }
            }
        }
    }

    let _ = sender.send(Message::Close(None)).await;
}
