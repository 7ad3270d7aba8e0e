use serde::{Deserialize, Serialize};
use taskboard_core::Timestamp;

use crate::activity::Activity;
use crate::group::Group;
use crate::label::Label;
use crate::member::Member;
use crate::task::Task;

pub type BoardId = String;

/// A board document. This is the unit of persistence: every edit to a
/// group, task or comment rewrites the whole board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Absent until the board is first saved.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BoardId>,
    pub title: String,
    pub archived_at: Timestamp,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Member>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub cmps_order: Vec<String>,
}

impl Board {
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn find_group(&self, group_id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Finds a task anywhere on the board, along with its group.
    pub fn find_task(&self, task_id: &str) -> Option<(&Group, &Task)> {
        self.groups
            .iter()
            .find_map(|g| g.find_task(task_id).map(|t| (g, t)))
    }

    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn task_count(&self) -> usize {
        self.groups.iter().map(|g| g.tasks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::seed::demo_board;
    use crate::templates::empty_board;

    #[test]
    fn test_unsaved_board_omits_id() {
        let json = serde_json::to_value(empty_board()).unwrap();
        assert!(json.get("_id").is_none());
        assert!(json.get("cmpsOrder").is_some());
        assert!(json.get("isStarred").is_some());
    }

    #[test]
    fn test_saved_board_uses_underscore_id() {
        let json = serde_json::to_value(demo_board()).unwrap();
        assert_eq!(json["_id"], "b101");
    }

    #[test]
    fn test_find_task_reports_group() {
        let board = demo_board();
        let (group, task) = board.find_task("c103").unwrap();
        assert_eq!(group.id, "g102");
        assert_eq!(task.title, "Help me");
        assert!(board.find_task("nope").is_none());
    }
}
