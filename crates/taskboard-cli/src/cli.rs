use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A collaborative task board with a realtime comment feed", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the board data file (or set TASKBOARD_FILE env var)
    #[arg(long, short, global = true, value_name = "FILE", env = "TASKBOARD_FILE")]
    pub file: Option<PathBuf>,

    /// Comment server address (or set TASKBOARD_SERVER env var)
    #[arg(long, global = true, value_name = "ADDR", env = "TASKBOARD_SERVER")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// Group operations
    Group(GroupCommand),
    /// Task operations
    Task(TaskCommand),
    /// Comment operations
    Comment(CommentCommand),
    /// Run the realtime comment server on --server
    Serve,
    /// Print comments posted to a task as they arrive
    Watch {
        #[arg(long)]
        task: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// List boards, optionally filtered
    List {
        /// Case-insensitive title pattern
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        starred: Option<bool>,
    },
    /// Get a board, optionally narrowing its groups and tasks
    Get {
        #[arg(long)]
        id: String,
        /// Group or task title pattern
        #[arg(long)]
        title: Option<String>,
        /// Only tasks assigned to this member
        #[arg(long)]
        member: Option<String>,
    },
    /// Create a board from the empty template
    Create {
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete a board and report which board to show next
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Save a copy of a board under a new id
    Duplicate {
        #[arg(long)]
        id: String,
    },
    /// Toggle a board's starred flag
    Star {
        #[arg(long)]
        id: String,
    },
    /// Rename a board
    Rename {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
}

// Group commands
#[derive(Args)]
pub struct GroupCommand {
    #[command(subcommand)]
    pub action: GroupAction,
}

#[derive(Subcommand)]
pub enum GroupAction {
    /// Append a group to a board
    Add {
        #[arg(long)]
        board: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Append a task to a group
    Add {
        #[arg(long)]
        board: String,
        #[arg(long)]
        group: String,
        #[arg(long)]
        title: String,
    },
    /// Update a task's fields
    Update(TaskUpdateArgs),
    /// Remove a task from its group
    Remove {
        #[arg(long)]
        board: String,
        #[arg(long)]
        group: String,
        #[arg(long)]
        task: String,
    },
    /// Show the activity log of a task
    Activity {
        #[arg(long)]
        board: String,
        #[arg(long)]
        task: String,
    },
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub board: String,
    #[arg(long)]
    pub group: String,
    #[arg(long)]
    pub task: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    /// Replace assigned members (comma separated ids)
    #[arg(long, value_delimiter = ',')]
    pub members: Option<Vec<String>>,
    /// Due date in milliseconds since the epoch
    #[arg(long)]
    pub due_date: Option<i64>,
}

// Comment commands
#[derive(Args)]
pub struct CommentCommand {
    #[command(subcommand)]
    pub action: CommentAction,
}

#[derive(Args)]
pub struct CommentTarget {
    #[arg(long)]
    pub board: String,
    #[arg(long)]
    pub group: String,
    #[arg(long)]
    pub task: String,
}

#[derive(Args, Default)]
pub struct StyleArgs {
    #[arg(long)]
    pub bold: bool,
    #[arg(long)]
    pub italic: bool,
    #[arg(long)]
    pub underline: bool,
    #[arg(long, value_enum)]
    pub align: Option<AlignArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AlignArg {
    Left,
    Center,
    Right,
}

#[derive(Subcommand)]
pub enum CommentAction {
    /// Prepend a comment to a task and broadcast it to the task's viewers
    Add {
        #[command(flatten)]
        target: CommentTarget,
        #[arg(long)]
        txt: String,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Edit a comment's text or toggle its style
    Edit {
        #[command(flatten)]
        target: CommentTarget,
        #[arg(long)]
        id: String,
        #[arg(long)]
        txt: Option<String>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Remove a comment
    Remove {
        #[command(flatten)]
        target: CommentTarget,
        #[arg(long)]
        id: String,
    },
}
