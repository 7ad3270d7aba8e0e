use crate::cli::{TaskAction, TaskUpdateArgs};
use crate::context::CliContext;
use crate::output;
use serde_json::json;
use taskboard_core::TaskboardError;
use taskboard_domain::{empty_activity, empty_task, operations, Activity, Task};

pub async fn handle(ctx: &CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add {
            board,
            group,
            title,
        } => {
            let task = empty_task().with_title(title);
            let task_id = task.id.clone();
            let updated = operations::add_task(&ctx.board(&board).await?, &group, task)?;
            let saved = ctx.repo.save(updated).await?;
            output::output_success(saved_task(&saved, &task_id)?)?;
        }
        TaskAction::Update(args) => {
            let task = handle_update(ctx, args).await?;
            output::output_success(&task)?;
        }
        TaskAction::Remove { board, group, task } => {
            let updated = operations::remove_task(&ctx.board(&board).await?, &group, &task)?;
            ctx.repo.save(updated).await?;
            output::output_success(json!({ "deleted": task }))?;
        }
        TaskAction::Activity { board, task } => {
            let board = ctx.board(&board).await?;
            let activities: Vec<&Activity> = operations::task_activities(&board, &task);
            output::output_list(activities)?;
        }
    }
    Ok(())
}

async fn handle_update(ctx: &CliContext, args: TaskUpdateArgs) -> anyhow::Result<Task> {
    let board = ctx.board(&args.board).await?;
    let current = board
        .find_group(&args.group)
        .and_then(|g| g.find_task(&args.task))
        .ok_or_else(|| TaskboardError::not_found("task", &args.task))?
        .clone();

    let mut task = current.clone();
    if let Some(title) = args.title {
        task.title = title;
    }
    if let Some(priority) = args.priority {
        task.priority = priority;
    }
    if let Some(members) = args.members {
        task = task.with_member_ids(members);
    }
    if let Some(due_date) = args.due_date {
        task.due_date = Some(due_date);
    }

    // Status changes are the ones recorded in the activity log.
    let mut activity = None;
    if let Some(status) = args.status {
        if status != current.status {
            activity = Some(
                empty_activity(&ctx.member)
                    .for_task(&current)
                    .with_change("status", json!(current.status), json!(status)),
            );
        }
        task.status = status;
    }

    let updated = operations::update_task(&board, &args.group, task, &ctx.member, activity)?;
    let saved = ctx.repo.save(updated).await?;
    Ok(saved_task(&saved, &args.task)?.clone())
}

fn saved_task<'a>(board: &'a taskboard_domain::Board, task_id: &str) -> anyhow::Result<&'a Task> {
    board
        .find_task(task_id)
        .map(|(_, task)| task)
        .ok_or_else(|| TaskboardError::not_found("task", task_id).into())
}
