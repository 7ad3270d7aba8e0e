use serde::{Deserialize, Serialize};
use taskboard_core::{now_millis, Timestamp};

use crate::comment::{Comment, CommentId};
use crate::member::{Member, MemberId};

pub type TaskId = String;

/// Who last edited a task, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedBy {
    pub member_id: MemberId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    pub date: Timestamp,
}

impl UpdatedBy {
    pub fn now(member: &Member) -> Self {
        Self {
            member_id: member.id.clone(),
            img_url: member.img_url.clone(),
            date: now_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    /// Weak references into `Board::members`; may dangle.
    #[serde(default)]
    pub member_ids: Vec<MemberId>,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    /// Newest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<UpdatedBy>,
}

impl Task {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn find_comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    pub fn has_member(&self, member_id: &str) -> bool {
        self.member_ids.iter().any(|id| id == member_id)
    }

    /// Returns a copy with `comment` at the front of the feed. No
    /// deduplication is done; a repeated id yields a second entry.
    pub fn with_comment_prepended(&self, comment: Comment) -> Self {
        let mut task = self.clone();
        task.comments.insert(0, comment);
        task
    }

    /// Returns a copy with the comment carrying `edited.id` replaced.
    pub fn with_comment_replaced(&self, edited: Comment) -> Option<Self> {
        let index = self.comments.iter().position(|c| c.id == edited.id)?;
        let mut task = self.clone();
        task.comments[index] = edited;
        Some(task)
    }

    pub fn without_comment(&self, comment_id: &CommentId) -> Self {
        let mut task = self.clone();
        task.comments.retain(|c| &c.id != comment_id);
        task
    }

    pub fn with_member_ids(mut self, member_ids: impl IntoIterator<Item = MemberId>) -> Self {
        self.member_ids.clear();
        for id in member_ids {
            if !self.member_ids.contains(&id) {
                self.member_ids.push(id);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{empty_comment, empty_task};

    fn author() -> Member {
        Member::new("m101", "Riya Revdiwala")
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let task = empty_task();
        let first = empty_comment(&author()).with_txt("first");
        let second = empty_comment(&author()).with_txt("second");

        let task = task
            .with_comment_prepended(first)
            .with_comment_prepended(second);
        assert_eq!(task.comments[0].txt, "second");
        assert_eq!(task.comments[1].txt, "first");
    }

    #[test]
    fn test_prepend_keeps_duplicate_ids() {
        let comment = empty_comment(&author());
        let task = empty_task()
            .with_comment_prepended(comment.clone())
            .with_comment_prepended(comment);
        assert_eq!(task.comments.len(), 2);
        assert_eq!(task.comments[0].id, task.comments[1].id);
    }

    #[test]
    fn test_prepend_leaves_original_untouched() {
        let task = empty_task();
        let _updated = task.with_comment_prepended(empty_comment(&author()));
        assert!(task.comments.is_empty());
    }

    #[test]
    fn test_replace_and_remove_comment() {
        let comment = empty_comment(&author()).with_txt("draft");
        let id = comment.id.clone();
        let task = empty_task().with_comment_prepended(comment.clone());

        let task = task
            .with_comment_replaced(comment.with_txt("final"))
            .unwrap();
        assert_eq!(task.find_comment(&id).unwrap().txt, "final");

        let task = task.without_comment(&id);
        assert!(task.comments.is_empty());
    }

    #[test]
    fn test_replace_unknown_comment_is_none() {
        let task = empty_task();
        assert!(task
            .with_comment_replaced(empty_comment(&author()))
            .is_none());
    }

    #[test]
    fn test_member_ids_are_deduplicated() {
        let task = empty_task().with_member_ids(vec![
            "m1".to_string(),
            "m2".to_string(),
            "m1".to_string(),
        ]);
        assert_eq!(task.member_ids, vec!["m1".to_string(), "m2".to_string()]);
        assert!(task.has_member("m2"));
        assert!(!task.has_member("m3"));
    }
}
