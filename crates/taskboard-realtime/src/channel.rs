//! Per-view realtime comment channel.
//!
//! A task view opens the channel when it is shown and closes it when it goes
//! away:
//!
//! ```text
//! Disconnected --open(task)--> Subscribed(task) --close()--> Disconnected
//! ```
//!
//! Local comments are applied to the caller's task snapshot first and then
//! broadcast. There is no acknowledgement or rollback: if the broadcast is
//! lost, other viewers simply never see the comment until they reload.
//! Remote comments are prepended unconditionally, without deduplication.

use taskboard_core::TaskboardResult;
use taskboard_domain::{Comment, Task, TaskId};
use tokio::sync::mpsc;

use crate::transport::{CommentTransport, ListenerId};
use crate::wire::ClientEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelState {
    Disconnected,
    Subscribed(TaskId),
}

pub struct TaskCommentChannel<T: CommentTransport> {
    transport: T,
    state: ChannelState,
    listener: Option<ListenerId>,
    incoming: Option<mpsc::UnboundedReceiver<Comment>>,
}

impl<T: CommentTransport> TaskCommentChannel<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ChannelState::Disconnected,
            listener: None,
            incoming: None,
        }
    }

    pub fn state(&self) -> &ChannelState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Subscribes to `task_id`'s feed, leaving any previous subscription.
    pub async fn open(&mut self, task_id: &str) -> TaskboardResult<()> {
        self.close();
        self.send(ClientEvent::SetTopic(task_id.to_string())).await;
        let listener = self.transport.on_comment_added();
        self.listener = Some(listener.id);
        self.incoming = Some(listener.rx);
        self.state = ChannelState::Subscribed(task_id.to_string());
        Ok(())
    }

    /// Deregisters the listener. Calling it again is a no-op.
    pub fn close(&mut self) {
        if let Some(id) = self.listener.take() {
            self.transport.off(id);
        }
        self.incoming = None;
        self.state = ChannelState::Disconnected;
    }

    /// Prepends `comment` to `task` and broadcasts it. The returned snapshot
    /// is what the caller should show and persist.
    pub async fn submit(&self, task: &Task, comment: Comment) -> Task {
        let updated = task.with_comment_prepended(comment.clone());
        self.send(ClientEvent::SendMsg(comment)).await;
        updated
    }

    /// Waits for the next remote comment. Returns `None` once the channel is
    /// closed.
    pub async fn recv(&mut self) -> Option<Comment> {
        self.incoming.as_mut()?.recv().await
    }

    pub fn try_recv(&mut self) -> Option<Comment> {
        self.incoming.as_mut()?.try_recv().ok()
    }

    /// Applies a remote comment to `task`.
    pub fn apply_remote(task: &Task, comment: Comment) -> Task {
        task.with_comment_prepended(comment)
    }

    async fn send(&self, event: ClientEvent) {
        let name = event.name();
        if let Err(e) = self.transport.emit(event).await {
            tracing::warn!("Failed to emit {}: {}", name, e);
        }
    }
}

impl<T: CommentTransport> Drop for TaskCommentChannel<T> {
    fn drop(&mut self) {
        self.close();
    }
}
