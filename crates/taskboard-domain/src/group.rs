use serde::{Deserialize, Serialize};
use taskboard_core::Timestamp;

use crate::task::Task;

pub type GroupId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    #[serde(default)]
    pub archived_at: Option<Timestamp>,
    pub color: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Group {
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}
