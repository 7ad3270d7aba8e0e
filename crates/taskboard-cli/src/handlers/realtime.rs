use crate::output;
use std::time::Duration;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{Comment, Task};
use taskboard_realtime::{serve, CommentHub, TaskCommentChannel, WsSocket};
use tokio::net::TcpListener;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

fn socket_url(addr: &str) -> String {
    format!("ws://{}/socket", addr)
}

/// Runs the comment hub until Ctrl-C.
pub async fn handle_serve(addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    output::output_success(serde_json::json!({
        "listening": socket_url(&local.to_string()),
    }))?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        }
    };
    serve(listener, CommentHub::new(), shutdown).await?;
    Ok(())
}

/// Subscribes to `task_id` and prints each incoming comment as one JSON line.
pub async fn handle_watch(addr: &str, task_id: &str) -> anyhow::Result<()> {
    let url = socket_url(addr);
    let mut channel = TaskCommentChannel::new(WsSocket::connect(&url).await?);
    channel.open(task_id).await?;
    tracing::info!("Watching comments on task {}", task_id);

    loop {
        tokio::select! {
            comment = channel.recv() => {
                let Some(comment) = comment else { break };
                output::output_success(&comment)?;
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    channel.close();
    Ok(())
}

/// Sends a comment that was just saved to the other viewers of its task.
/// Delivery is best effort: an unreachable server is logged and ignored.
pub async fn broadcast_comment(addr: &str, task: &Task, comment: Comment) {
    if let Err(e) = try_broadcast(addr, task, comment).await {
        tracing::warn!("Comment saved but not broadcast to {}: {}", addr, e);
    }
}

async fn try_broadcast(addr: &str, task: &Task, comment: Comment) -> TaskboardResult<()> {
    let url = socket_url(addr);
    let socket = tokio::time::timeout(CONNECT_TIMEOUT, WsSocket::connect(&url))
        .await
        .map_err(|_| TaskboardError::Channel(format!("connect {}: timed out", url)))??;

    let mut channel = TaskCommentChannel::new(socket);
    channel.open(&task.id).await?;
    channel.submit(task, comment).await;
    channel.transport().flush().await?;
    channel.close();
    Ok(())
}
