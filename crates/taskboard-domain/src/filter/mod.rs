//! Board and task filtering.
//!
//! `BoardQuery` narrows the board list; `TaskQuery` narrows the groups and
//! tasks shown inside a single board.

pub mod board_query;
pub mod task_query;
pub mod title;

pub use board_query::{BoardFilter, BoardQuery, StarredFilter, TitleFilter};
pub use task_query::TaskQuery;
pub use title::TitleMatcher;
