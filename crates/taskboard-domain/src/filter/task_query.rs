use serde::{Deserialize, Serialize};

use super::title::TitleMatcher;
use crate::board::Board;

/// Narrows what is visible inside a single board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub member_id: Option<String>,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_member(mut self, member_id: impl Into<String>) -> Self {
        self.member_id = Some(member_id.into());
        self
    }

    /// Applies the query to `board`.
    ///
    /// The title filter is two-level with group precedence. When any group
    /// title matches, exactly those groups survive with all of their tasks,
    /// and task titles are not consulted. When no group title matches, the
    /// groups holding at least one matching task survive, again with all of
    /// their tasks. Task titles never trim the tasks inside a kept group.
    pub fn narrow(&self, mut board: Board) -> Board {
        if let Some(matcher) = TitleMatcher::new(&self.title) {
            let any_group_matches = board.groups.iter().any(|g| matcher.is_match(&g.title));
            if any_group_matches {
                board.groups.retain(|group| matcher.is_match(&group.title));
            } else {
                board
                    .groups
                    .retain(|group| group.tasks.iter().any(|t| matcher.is_match(&t.title)));
            }
        }
        if let Some(member_id) = &self.member_id {
            for group in &mut board.groups {
                group.tasks.retain(|task| task.has_member(member_id));
            }
        }
        board
    }
}
