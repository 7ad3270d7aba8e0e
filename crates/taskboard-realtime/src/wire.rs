//! JSON events exchanged over the comment socket.
//!
//! Frames are `{"type": <event name>, "data": <payload>}`. There is no
//! schema version and no acknowledgement.

use serde::{Deserialize, Serialize};
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{Comment, TaskId};

pub const SET_TOPIC: &str = "chat-set-topic";
pub const SEND_MSG: &str = "chat-send-msg";
pub const ADD_MSG: &str = "chat-add-msg";

/// Sent by a viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientEvent {
    /// Join the feed of one task, leaving any previous one.
    #[serde(rename = "chat-set-topic")]
    SetTopic(TaskId),
    /// Broadcast a freshly written comment to the current topic.
    #[serde(rename = "chat-send-msg")]
    SendMsg(Comment),
}

/// Sent to viewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerEvent {
    #[serde(rename = "chat-add-msg")]
    AddMsg(Comment),
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTopic(_) => SET_TOPIC,
            Self::SendMsg(_) => SEND_MSG,
        }
    }
}

pub fn encode<T: Serialize>(event: &T) -> TaskboardResult<String> {
    Ok(serde_json::to_string(event)?)
}

pub fn decode<T: serde::de::DeserializeOwned>(text: &str) -> TaskboardResult<T> {
    serde_json::from_str(text).map_err(|e| TaskboardError::Serialization(e.to_string()))
}
