use async_trait::async_trait;
use std::sync::Arc;
use taskboard_core::TaskboardResult;

use crate::hub::{CommentHub, PeerId};
use crate::transport::{CommentListener, CommentTransport, ListenerId, ListenerRegistry};
use crate::wire::ClientEvent;

/// In-process connection to a [`CommentHub`]. Events are applied to the hub
/// synchronously, which makes delivery order deterministic.
pub struct LocalSocket {
    hub: CommentHub,
    peer: PeerId,
    listeners: ListenerRegistry,
}

impl LocalSocket {
    pub fn connect(hub: &CommentHub) -> Self {
        let listeners = ListenerRegistry::new();
        let peer = hub.join(Arc::new(listeners.clone()));
        Self {
            hub: hub.clone(),
            peer,
            listeners,
        }
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer
    }
}

impl Drop for LocalSocket {
    fn drop(&mut self) {
        self.hub.leave(self.peer);
    }
}

#[async_trait]
impl CommentTransport for LocalSocket {
    async fn emit(&self, event: ClientEvent) -> TaskboardResult<()> {
        tracing::debug!("Peer {} emits {}", self.peer, event.name());
        self.hub.handle(self.peer, event);
        Ok(())
    }

    fn on_comment_added(&self) -> CommentListener {
        self.listeners.register()
    }

    fn off(&self, id: ListenerId) -> bool {
        self.listeners.deregister(id)
    }
}
