use crate::cli::{AlignArg, CommentAction, StyleArgs};
use crate::context::CliContext;
use crate::handlers::realtime;
use crate::output;
use taskboard_core::TaskboardError;
use taskboard_domain::{empty_comment, operations, StyleToggle, TextAlign, TextStyle};

pub async fn handle(ctx: &CliContext, action: CommentAction) -> anyhow::Result<()> {
    match action {
        CommentAction::Add { target, txt, style } => {
            let comment = empty_comment(&ctx.member)
                .with_txt(txt)
                .with_style(apply_style(TextStyle::default(), &style));
            let board = ctx.board(&target.board).await?;
            let (updated, task) =
                operations::add_comment(&board, &target.group, &target.task, comment.clone())?;
            ctx.repo.save(updated).await?;
            realtime::broadcast_comment(&ctx.server_addr, &task, comment.clone()).await;
            output::output_success(&comment)?;
        }
        CommentAction::Edit {
            target,
            id,
            txt,
            style,
        } => {
            let board = ctx.board(&target.board).await?;
            let existing = board
                .find_task(&target.task)
                .and_then(|(_, task)| task.find_comment(&id))
                .ok_or_else(|| TaskboardError::not_found("comment", &id))?
                .clone();

            let mut edited = existing.clone();
            if let Some(txt) = txt {
                edited = edited.with_txt(txt);
            }
            edited = edited.with_style(apply_style(existing.style, &style));

            let (updated, _) =
                operations::edit_comment(&board, &target.group, &target.task, edited.clone())?;
            ctx.repo.save(updated).await?;
            output::output_success(&edited)?;
        }
        CommentAction::Remove { target, id } => {
            let board = ctx.board(&target.board).await?;
            let (updated, _) =
                operations::remove_comment(&board, &target.group, &target.task, &id)?;
            ctx.repo.save(updated).await?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
    }
    Ok(())
}

fn apply_style(style: TextStyle, args: &StyleArgs) -> TextStyle {
    let mut toggles = Vec::new();
    if args.bold {
        toggles.push(StyleToggle::Bold);
    }
    if args.italic {
        toggles.push(StyleToggle::Italic);
    }
    if args.underline {
        toggles.push(StyleToggle::Underline);
    }
    if let Some(align) = args.align {
        toggles.push(StyleToggle::Align(match align {
            AlignArg::Left => TextAlign::Left,
            AlignArg::Center => TextAlign::Center,
            AlignArg::Right => TextAlign::Right,
        }));
    }
    toggles.into_iter().fold(style, TextStyle::toggled)
}
