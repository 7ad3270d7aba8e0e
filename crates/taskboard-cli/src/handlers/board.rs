use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::{empty_board, operations, BoardQuery, TaskQuery};

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::List { title, starred } => {
            let mut query = BoardQuery::new().with_title(title.unwrap_or_default());
            if let Some(is_starred) = starred {
                query = query.starred(is_starred);
            }
            let boards = ctx.repo.query(&query).await?;
            output::output_list(boards)?;
        }
        BoardAction::Get { id, title, member } => {
            let mut query = TaskQuery::new().with_title(title.unwrap_or_default());
            if let Some(member_id) = member {
                query = query.with_member(member_id);
            }
            let board = ctx.repo.get_by_id(&id, &query).await?;
            output::output_success(&board)?;
        }
        BoardAction::Create { title } => {
            let mut board = empty_board();
            if let Some(title) = title {
                board = operations::rename_board(&board, title)?;
            }
            board.created_by = Some(ctx.member.clone());
            let board = ctx.repo.save(board).await?;
            output::output_success(&board)?;
        }
        BoardAction::Delete { id } => {
            let outcome = ctx.repo.remove_with_fallback(&id).await?;
            output::output_success(&outcome)?;
        }
        BoardAction::Duplicate { id } => {
            let copy = operations::duplicate_board(&ctx.board(&id).await?);
            let board = ctx.repo.save(copy).await?;
            output::output_success(&board)?;
        }
        BoardAction::Star { id } => {
            let board = operations::toggle_star(&ctx.board(&id).await?);
            let board = ctx.repo.save(board).await?;
            output::output_success(&board)?;
        }
        BoardAction::Rename { id, title } => {
            let board = operations::rename_board(&ctx.board(&id).await?, title)?;
            let board = ctx.repo.save(board).await?;
            output::output_success(&board)?;
        }
    }
    Ok(())
}
