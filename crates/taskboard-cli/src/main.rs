mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::path::PathBuf;
use taskboard_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load();

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "taskboard",
                &mut std::io::stdout(),
            );
        }
        Commands::Serve => {
            handlers::realtime::handle_serve(&server_addr(cli.server, &config)).await?;
        }
        Commands::Watch { task } => {
            handlers::realtime::handle_watch(&server_addr(cli.server, &config), &task).await?;
        }
        Commands::Board(board_cmd) => {
            let ctx = open_context(cli.file, cli.server, &config).await?;
            handlers::board::handle(&ctx, board_cmd.action).await?;
        }
        Commands::Group(group_cmd) => {
            let ctx = open_context(cli.file, cli.server, &config).await?;
            handlers::group::handle(&ctx, group_cmd.action).await?;
        }
        Commands::Task(task_cmd) => {
            let ctx = open_context(cli.file, cli.server, &config).await?;
            handlers::task::handle(&ctx, task_cmd.action).await?;
        }
        Commands::Comment(comment_cmd) => {
            let ctx = open_context(cli.file, cli.server, &config).await?;
            handlers::comment::handle(&ctx, comment_cmd.action).await?;
        }
    }
    Ok(())
}

async fn open_context(
    file: Option<PathBuf>,
    server: Option<String>,
    config: &AppConfig,
) -> anyhow::Result<CliContext> {
    let file_path = file.unwrap_or_else(|| config.effective_data_file());
    let mut ctx = CliContext::load(&file_path, config).await?;
    ctx.server_addr = server_addr(server, config);
    Ok(ctx)
}

fn server_addr(flag: Option<String>, config: &AppConfig) -> String {
    flag.unwrap_or_else(|| config.effective_server_addr().to_string())
}
