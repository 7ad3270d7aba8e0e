use serde::{Deserialize, Serialize};
use taskboard_core::Timestamp;

use crate::member::Member;
use crate::task::{Task, TaskId};

/// Denormalized copy of the task an activity refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    pub id: TaskId,
    pub title: String,
}

impl From<&Task> for TaskRef {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
        }
    }
}

/// Append-only entry in a board's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub action: String,
    pub created_at: Timestamp,
    pub by_member: Member,
    pub task: TaskRef,
    #[serde(default)]
    pub from: serde_json::Value,
    #[serde(default)]
    pub to: serde_json::Value,
}

impl Activity {
    pub fn for_task(mut self, task: &Task) -> Self {
        self.task = TaskRef::from(task);
        self
    }

    pub fn with_change(
        mut self,
        action: impl Into<String>,
        from: serde_json::Value,
        to: serde_json::Value,
    ) -> Self {
        self.action = action.into();
        self.from = from;
        self.to = to;
        self
    }
}
