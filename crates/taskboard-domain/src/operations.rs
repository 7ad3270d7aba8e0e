//! Pure board edits.
//!
//! Each function takes the current board by reference and returns a new
//! snapshot; nothing is mutated in place. Callers persist the result with
//! the repository and replace their own reference with it.

use taskboard_core::{TaskboardError, TaskboardResult};

use crate::activity::Activity;
use crate::board::Board;
use crate::comment::{Comment, CommentId};
use crate::group::Group;
use crate::member::Member;
use crate::task::{Task, UpdatedBy};

fn group_index(board: &Board, group_id: &str) -> TaskboardResult<usize> {
    board
        .groups
        .iter()
        .position(|g| g.id == group_id)
        .ok_or_else(|| TaskboardError::not_found("group", group_id))
}

fn task_index(group: &Group, task_id: &str) -> TaskboardResult<usize> {
    group
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| TaskboardError::not_found("task", task_id))
}

/// Deep copy with the id cleared so saving it creates a new board.
pub fn duplicate_board(board: &Board) -> Board {
    let mut copy = board.clone();
    copy.id = None;
    copy
}

pub fn toggle_star(board: &Board) -> Board {
    let mut board = board.clone();
    board.is_starred = !board.is_starred;
    board
}

pub fn rename_board(board: &Board, title: impl Into<String>) -> TaskboardResult<Board> {
    let title = title.into();
    if title.trim().is_empty() {
        return Err(TaskboardError::Validation(
            "board title cannot be empty".to_string(),
        ));
    }
    let mut board = board.clone();
    board.title = title;
    Ok(board)
}

pub fn add_group(board: &Board, group: Group) -> Board {
    let mut board = board.clone();
    board.groups.push(group);
    board
}

pub fn add_task(board: &Board, group_id: &str, task: Task) -> TaskboardResult<Board> {
    let index = group_index(board, group_id)?;
    let mut board = board.clone();
    board.groups[index].tasks.push(task);
    Ok(board)
}

/// Replaces the task with `task.id` in `group_id`, stamping it as last
/// edited by `editor`. When given, `activity` is appended to the board log.
pub fn update_task(
    board: &Board,
    group_id: &str,
    task: Task,
    editor: &Member,
    activity: Option<Activity>,
) -> TaskboardResult<Board> {
    let g = group_index(board, group_id)?;
    let t = task_index(&board.groups[g], &task.id)?;

    let mut task = task;
    task.updated_by = Some(UpdatedBy::now(editor));

    let mut board = board.clone();
    board.groups[g].tasks[t] = task;
    if let Some(activity) = activity {
        board.activities.push(activity);
    }
    Ok(board)
}

pub fn remove_task(board: &Board, group_id: &str, task_id: &str) -> TaskboardResult<Board> {
    let g = group_index(board, group_id)?;
    let t = task_index(&board.groups[g], task_id)?;
    let mut board = board.clone();
    board.groups[g].tasks.remove(t);
    Ok(board)
}

fn with_task(
    board: &Board,
    group_id: &str,
    task_id: &str,
    edit: impl FnOnce(&Task) -> TaskboardResult<Task>,
) -> TaskboardResult<(Board, Task)> {
    let g = group_index(board, group_id)?;
    let t = task_index(&board.groups[g], task_id)?;
    let task = edit(&board.groups[g].tasks[t])?;
    let mut board = board.clone();
    board.groups[g].tasks[t] = task.clone();
    Ok((board, task))
}

/// Prepends `comment` to the task's feed. Returns the new board and the
/// updated task.
pub fn add_comment(
    board: &Board,
    group_id: &str,
    task_id: &str,
    comment: Comment,
) -> TaskboardResult<(Board, Task)> {
    if comment.txt.trim().is_empty() {
        return Err(TaskboardError::Validation(
            "comment text cannot be empty".to_string(),
        ));
    }
    with_task(board, group_id, task_id, |task| {
        Ok(task.with_comment_prepended(comment))
    })
}

pub fn edit_comment(
    board: &Board,
    group_id: &str,
    task_id: &str,
    comment: Comment,
) -> TaskboardResult<(Board, Task)> {
    with_task(board, group_id, task_id, |task| {
        let id = comment.id.clone();
        task.with_comment_replaced(comment)
            .ok_or_else(|| TaskboardError::not_found("comment", id))
    })
}

pub fn remove_comment(
    board: &Board,
    group_id: &str,
    task_id: &str,
    comment_id: &CommentId,
) -> TaskboardResult<(Board, Task)> {
    with_task(board, group_id, task_id, |task| {
        if task.find_comment(comment_id).is_none() {
            return Err(TaskboardError::not_found("comment", comment_id));
        }
        Ok(task.without_comment(comment_id))
    })
}

/// The board's activity log entries for one task, in log order.
pub fn task_activities<'a>(board: &'a Board, task_id: &str) -> Vec<&'a Activity> {
    board
        .activities
        .iter()
        .filter(|a| a.task.id == task_id)
        .collect()
}
