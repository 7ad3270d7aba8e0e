//! Fixed demo content written to an empty store on first run.

use crate::board::Board;
use crate::comment::{Comment, TextStyle};
use crate::group::Group;
use crate::label::Label;
use crate::member::Member;
use crate::task::Task;

const SEED_TIMESTAMP: i64 = 1_589_983_468_418;
const RIYA_IMG_URL: &str = "https://media.licdn.com/dms/image/C5603AQG-0F15kbMgPw/profile-displayphoto-shrink_200_200/0/1643380401291?e=2147483647&v=beta&t=6GSZofpUR-hwmTvkPI-RwN0GI6lYIwQEGYoLwUy9q0A";

fn task(id: &str, title: &str, status: &str, priority: &str, members: &[&str], due: i64) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        status: status.to_string(),
        priority: priority.to_string(),
        member_ids: members.iter().map(|m| m.to_string()).collect(),
        due_date: Some(due),
        comments: Vec::new(),
        updated_by: None,
    }
}

fn comment(id: &str, author: Member, txt: &str) -> Comment {
    Comment {
        id: id.to_string(),
        archived_at: SEED_TIMESTAMP,
        by_member: author,
        txt: txt.to_string(),
        style: TextStyle::default(),
    }
}

/// The "Robot dev proj" board: two groups, five tasks.
pub fn demo_board() -> Board {
    let mut replace_logo = task(
        "c101",
        "Replace logo",
        "Stuck",
        "Medium",
        &["m101", "m102", "m103"],
        1_615_621,
    );
    replace_logo.comments = vec![
        comment("a101", Member::new("m101", "Riya Revdiwala"), "babababababaababaab"),
        comment("a102", Member::new("m102", "Ashutosh Joshi"), "bababa"),
        comment("a103", Member::new("m102", "Riya Revdiwala"), "baba"),
    ];

    Board {
        id: Some("b101".to_string()),
        title: "Robot dev proj".to_string(),
        archived_at: SEED_TIMESTAMP,
        is_starred: false,
        created_by: Some(Member::new("m102", "Jonathan Ramirez")),
        labels: vec![
            Label::new("l101", "Done", "#00c875"),
            Label::new("l102", "Progress", "#fdab3d"),
            Label::new("l103", "Stuck", "#e2445c"),
            Label::new("l104", "Low", "#ffcb00"),
            Label::new("l105", "Medium", "#a25ddc"),
            Label::new("l106", "High", "#e2445c"),
            Label::new("l107", "", "#c4c4c4"),
        ],
        members: vec![
            Member::new("m101", "Riya Revdiwala").with_img_url(RIYA_IMG_URL),
            Member::new("m102", "Ashutosh Joshi"),
            Member::new("m103", "Jonathan Ramirez"),
            Member::new("m104", "Jeff"),
        ],
        groups: vec![
            Group {
                id: "g101".to_string(),
                title: "Group 1".to_string(),
                archived_at: Some(SEED_TIMESTAMP),
                color: "#66ccff".to_string(),
                tasks: vec![
                    replace_logo,
                    task("c102", "Add Samples", "Done", "Low", &["m101"], 16_156_211_111),
                ],
            },
            Group {
                id: "g102".to_string(),
                title: "Group 2".to_string(),
                archived_at: None,
                color: "#a25ddc".to_string(),
                tasks: vec![
                    task("c103", "Help me", "Done", "High", &["m101", "m102", "m103"], 16_156_215_211),
                    task("c104", "Help me", "Done", "High", &["m103"], 16_156_215_211),
                    task("c105", "Help me", "Progress", "Low", &["m101", "m103"], 16_156_215_211),
                ],
            },
        ],
        activities: Vec::new(),
        cmps_order: vec![
            "member-picker".to_string(),
            "status-picker".to_string(),
            "date-picker".to_string(),
            "priority-picker".to_string(),
        ],
    }
}
