//! Topic hub on the server side of the comment socket.
//!
//! Each connected peer listens to at most one task topic. A comment sent by
//! a peer is re-broadcast to every other peer on the same topic; the sender
//! already shows it locally.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use taskboard_domain::TaskId;
use tokio::sync::mpsc;

use crate::wire::{ClientEvent, ServerEvent};

pub type PeerId = u64;

/// Where the hub delivers events for one peer.
pub trait PeerSink: Send + Sync {
    /// Returns false when the peer can no longer receive.
    fn deliver(&self, event: ServerEvent) -> bool;
}

impl PeerSink for mpsc::UnboundedSender<ServerEvent> {
    fn deliver(&self, event: ServerEvent) -> bool {
        self.send(event).is_ok()
    }
}

struct Peer {
    topic: Option<TaskId>,
    sink: Arc<dyn PeerSink>,
}

#[derive(Default)]
struct HubInner {
    peers: Mutex<HashMap<PeerId, Peer>>,
    next_id: AtomicU64,
}

/// Cheap to clone; clones share the same peers.
#[derive(Clone, Default)]
pub struct CommentHub {
    inner: Arc<HubInner>,
}

impl CommentHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&self, sink: Arc<dyn PeerSink>) -> PeerId {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .peers
            .lock()
            .insert(id, Peer { topic: None, sink });
        tracing::debug!("Peer {} joined", id);
        id
    }

    pub fn leave(&self, peer: PeerId) {
        if self.inner.peers.lock().remove(&peer).is_some() {
            tracing::debug!("Peer {} left", peer);
        }
    }

    pub fn peer_count(&self) -> usize {
        self.inner.peers.lock().len()
    }

    pub fn topic_of(&self, peer: PeerId) -> Option<TaskId> {
        self.inner
            .peers
            .lock()
            .get(&peer)
            .and_then(|p| p.topic.clone())
    }

    /// Number of peers currently listening to `topic`.
    pub fn listeners_on(&self, topic: &str) -> usize {
        self.inner
            .peers
            .lock()
            .values()
            .filter(|p| p.topic.as_deref() == Some(topic))
            .count()
    }

    /// Applies an event from `from`. Returns how many peers a broadcast
    /// reached (zero for topic changes).
    pub fn handle(&self, from: PeerId, event: ClientEvent) -> usize {
        match event {
            ClientEvent::SetTopic(topic) => {
                if let Some(peer) = self.inner.peers.lock().get_mut(&from) {
                    tracing::debug!("Peer {} set topic {}", from, topic);
                    peer.topic = Some(topic);
                }
                0
            }
            ClientEvent::SendMsg(comment) => {
                let targets: Vec<Arc<dyn PeerSink>> = {
                    let peers = self.inner.peers.lock();
                    let Some(topic) = peers.get(&from).and_then(|p| p.topic.clone()) else {
                        tracing::debug!("Dropping message from peer {} with no topic", from);
                        return 0;
                    };
                    peers
                        .iter()
                        .filter(|(id, p)| **id != from && p.topic.as_deref() == Some(topic.as_str()))
                        .map(|(_, p)| Arc::clone(&p.sink))
                        .collect()
                };
                // Deliver outside the lock; a sink may call back into the hub.
                targets
                    .iter()
                    .filter(|sink| sink.deliver(ServerEvent::AddMsg(comment.clone())))
                    .count()
            }
        }
    }
}
