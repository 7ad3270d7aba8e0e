use crate::cli::GroupAction;
use crate::context::CliContext;
use crate::output;
use taskboard_core::TaskboardError;
use taskboard_domain::{empty_group, operations};

pub async fn handle(ctx: &CliContext, action: GroupAction) -> anyhow::Result<()> {
    match action {
        GroupAction::Add {
            board,
            title,
            color,
        } => {
            let mut group = empty_group();
            if let Some(title) = title {
                group.title = title;
            }
            if let Some(color) = color {
                group.color = color;
            }
            let group_id = group.id.clone();

            let updated = operations::add_group(&ctx.board(&board).await?, group);
            let saved = ctx.repo.save(updated).await?;
            let group = saved.find_group(&group_id).ok_or_else(|| {
                TaskboardError::Internal("Group creation succeeded but group not found".into())
            })?;
            output::output_success(group)?;
        }
    }
    Ok(())
}
