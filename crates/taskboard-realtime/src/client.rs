use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use taskboard_core::{TaskboardError, TaskboardResult};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;

use crate::transport::{CommentListener, CommentTransport, ListenerId, ListenerRegistry};
use crate::wire::{self, ClientEvent, ServerEvent};

enum Outgoing {
    Event(ClientEvent),
    Flush(oneshot::Sender<()>),
}

/// WebSocket connection to a comment hub.
///
/// Outgoing events are queued to a writer task, so `emit` never waits on the
/// network. Incoming `chat-add-msg` frames are fanned out to listeners.
pub struct WsSocket {
    outbox: mpsc::UnboundedSender<Outgoing>,
    listeners: ListenerRegistry,
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
}

impl WsSocket {
    pub async fn connect(url: &str) -> TaskboardResult<Self> {
        let (stream, _response) = tokio_tungstenite::connect_async(url)
            .await
            .map_err(|e| TaskboardError::Channel(format!("connect {}: {}", url, e)))?;
        tracing::info!("Connected to comment socket at {}", url);

        let (mut sink, mut source) = stream.split();
        let (outbox, mut pending) = mpsc::unbounded_channel::<Outgoing>();
        let listeners = ListenerRegistry::new();

        let writer = tokio::spawn(async move {
            while let Some(outgoing) = pending.recv().await {
                let event = match outgoing {
                    Outgoing::Event(event) => event,
                    Outgoing::Flush(done) => {
                        if let Err(e) = sink.flush().await {
                            tracing::warn!("Comment socket flush failed: {}", e);
                        }
                        let _ = done.send(());
                        continue;
                    }
                };
                let text = match wire::encode(&event) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!("Failed to encode {}: {}", event.name(), e);
                        continue;
                    }
                };
                if let Err(e) = sink.send(Message::Text(text)).await {
                    tracing::warn!("Comment socket write failed: {}", e);
                    break;
                }
            }
            let _ = sink.close().await;
        });

        let registry = listeners.clone();
        let reader = tokio::spawn(async move {
            while let Some(frame) = source.next().await {
                match frame {
                    Ok(Message::Text(text)) => match wire::decode::<ServerEvent>(&text) {
                        Ok(ServerEvent::AddMsg(comment)) => {
                            registry.dispatch(&comment);
                        }
                        Err(e) => tracing::warn!("Ignoring frame: {}", e),
                    },
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!("Comment socket read failed: {}", e);
                        break;
                    }
                }
            }
            tracing::debug!("Comment socket reader finished");
        });

        Ok(Self {
            outbox,
            listeners,
            reader,
            writer,
        })
    }

    /// Waits until every event emitted so far has been written to the
    /// socket. Short-lived callers use this before exiting.
    pub async fn flush(&self) -> TaskboardResult<()> {
        let (done, written) = oneshot::channel();
        self.outbox
            .send(Outgoing::Flush(done))
            .map_err(|_| closed())?;
        written.await.map_err(|_| closed())
    }
}

fn closed() -> TaskboardError {
    TaskboardError::Channel("comment socket closed".to_string())
}

impl Drop for WsSocket {
    fn drop(&mut self) {
        self.reader.abort();
        self.writer.abort();
    }
}

#[async_trait]
impl CommentTransport for WsSocket {
    async fn emit(&self, event: ClientEvent) -> TaskboardResult<()> {
        self.outbox.send(Outgoing::Event(event)).map_err(|_| closed())
    }

    fn on_comment_added(&self) -> CommentListener {
        self.listeners.register()
    }

    fn off(&self, id: ListenerId) -> bool {
        self.listeners.deregister(id)
    }
}
