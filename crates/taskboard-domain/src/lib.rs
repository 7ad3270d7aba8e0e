pub mod activity;
pub mod board;
pub mod comment;
pub mod filter;
pub mod group;
pub mod label;
pub mod member;
pub mod operations;
pub mod seed;
pub mod task;
pub mod templates;

pub use activity::{Activity, TaskRef};
pub use board::{Board, BoardId};
pub use comment::{
    Comment, CommentId, FontStyle, FontWeight, StyleToggle, TextAlign, TextDecoration, TextStyle,
};
pub use filter::{BoardQuery, TaskQuery, TitleMatcher};
pub use group::{Group, GroupId};
pub use label::Label;
pub use member::{Member, MemberId};
pub use seed::demo_board;
pub use task::{Task, TaskId, UpdatedBy};
pub use templates::{
    empty_activity, empty_board, empty_comment, empty_group, empty_task, DEFAULT_CMPS_ORDER,
};
