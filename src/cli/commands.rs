use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::TaskId;

#[derive(Parser)]
#[command(name = "listo", about = concat!("listo v", env!("CARGO_PKG_VERSION"), " - a small to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Keep tasks in a different data directory
    #[arg(short = 'D', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks (active by default)
    List(ListArgs),
    /// Add a task
    Add(AddArgs),
    /// Change a task's text
    Edit(EditArgs),
    /// Toggle a task's completed flag
    Done(IdArg),
    /// Toggle a task's important flag
    Star(IdArg),
    /// Toggle a task's archived flag
    Archive(IdArg),
    /// Permanently delete a task
    Rm(IdArg),
    /// Show or set the theme preference
    Theme(ThemeArgs),
    /// Inspect or edit the config file
    Config(ConfigCmd),
}

// ---------------------------------------------------------------------------
// Task args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Show completed tasks that are not archived
    #[arg(long, conflicts_with_all = ["archived", "all"])]
    pub completed: bool,
    /// Show archived tasks
    #[arg(long, conflicts_with = "all")]
    pub archived: bool,
    /// Show every task in store order
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: TaskId,
    /// New text (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct IdArg {
    /// Task ID
    pub id: TaskId,
}

// ---------------------------------------------------------------------------
// Theme args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ThemeArgs {
    /// New preference; omit to print the current one
    pub mode: Option<ThemeChoice>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}

// ---------------------------------------------------------------------------
// Config args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Write a commented config template
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Set a value by dotted key, e.g. `ui.notice_secs 5`
    Set {
        /// Dotted key
        key: String,
        /// Value (TOML literal or bare string)
        value: String,
    },
}
