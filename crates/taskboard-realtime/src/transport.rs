use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use taskboard_core::TaskboardResult;
use taskboard_domain::Comment;
use tokio::sync::mpsc;

use crate::hub::PeerSink;
use crate::wire::{ClientEvent, ServerEvent};

pub type ListenerId = u64;

/// A registered "comment added" listener. Comments arrive on `rx` until the
/// listener is deregistered.
#[derive(Debug)]
pub struct CommentListener {
    pub id: ListenerId,
    pub rx: mpsc::UnboundedReceiver<Comment>,
}

/// Client side of the comment socket.
///
/// Delivery is at most once: `emit` hands the event to the transport and
/// returns; nothing confirms that any peer received it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentTransport: Send + Sync {
    async fn emit(&self, event: ClientEvent) -> TaskboardResult<()>;

    /// Registers a listener for "comment added" events.
    fn on_comment_added(&self) -> CommentListener;

    /// Deregisters a listener. Returns false if it was not registered.
    fn off(&self, id: ListenerId) -> bool;
}

/// Fan-out of incoming comments to registered listeners.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    listeners: Arc<Mutex<HashMap<ListenerId, mpsc::UnboundedSender<Comment>>>>,
    next_id: Arc<AtomicU64>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> CommentListener {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.lock().insert(id, tx);
        CommentListener { id, rx }
    }

    pub fn deregister(&self, id: ListenerId) -> bool {
        self.listeners.lock().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }

    /// Hands `comment` to every listener, dropping the ones whose receiver
    /// is gone. Returns the number of listeners reached.
    pub fn dispatch(&self, comment: &Comment) -> usize {
        let mut listeners = self.listeners.lock();
        listeners.retain(|_, tx| tx.send(comment.clone()).is_ok());
        listeners.len()
    }
}

impl PeerSink for ListenerRegistry {
    fn deliver(&self, event: ServerEvent) -> bool {
        match event {
            ServerEvent::AddMsg(comment) => {
                self.dispatch(&comment);
            }
        }
        true
    }
}
