//! Blank documents used as initial form state and as templates for new
//! boards, groups, tasks, comments and activities. Every call hands out
//! fresh identifiers and the current time.

use taskboard_core::{make_id, now_millis};

use crate::activity::{Activity, TaskRef};
use crate::board::Board;
use crate::comment::{Comment, TextStyle};
use crate::group::Group;
use crate::label::Label;
use crate::member::Member;
use crate::task::Task;

pub const DEFAULT_CMPS_ORDER: [&str; 4] = [
    "status-picker",
    "member-picker",
    "date-picker",
    "priority-picker",
];

pub const DEFAULT_GROUP_COLOR: &str = "#ffcb00";

/// An unsaved board. `id` stays `None` so that saving it creates a new
/// document.
pub fn empty_board() -> Board {
    Board {
        id: None,
        title: "New Board".to_string(),
        archived_at: now_millis(),
        is_starred: false,
        created_by: None,
        labels: vec![
            Label::new("l101", "Done", "#037f4c"),
            Label::new("l102", "Progress", "#ffcb00"),
            Label::new("l103", "stack", "#e2445c"),
        ],
        members: vec![
            Member::new("m101", "Riya Revdiwala"),
            Member::new("m102", "Jonathan Ramirez"),
        ],
        groups: Vec::new(),
        activities: Vec::new(),
        cmps_order: DEFAULT_CMPS_ORDER.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn empty_group() -> Group {
    Group {
        id: make_id(),
        title: "New Group".to_string(),
        archived_at: Some(now_millis()),
        color: DEFAULT_GROUP_COLOR.to_string(),
        tasks: Vec::new(),
    }
}

pub fn empty_task() -> Task {
    Task {
        id: make_id(),
        title: String::new(),
        status: String::new(),
        priority: String::new(),
        member_ids: Vec::new(),
        due_date: None,
        comments: Vec::new(),
        updated_by: None,
    }
}

pub fn empty_comment(author: &Member) -> Comment {
    Comment {
        id: make_id(),
        archived_at: now_millis(),
        by_member: author.clone(),
        txt: String::new(),
        style: TextStyle::default(),
    }
}

pub fn empty_activity(author: &Member) -> Activity {
    Activity {
        action: "status".to_string(),
        created_at: now_millis(),
        by_member: author.clone(),
        task: TaskRef {
            id: String::new(),
            title: String::new(),
        },
        from: serde_json::json!({}),
        to: serde_json::json!({}),
    }
}
