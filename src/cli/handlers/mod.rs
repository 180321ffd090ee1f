mod config;

use std::path::Path;

use thiserror::Error;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{ConfigError, read_config};
use crate::io::paths::{config_path, resolve_data_dir};
use crate::io::session::{SaveFailed, Session};
use crate::io::storage::{FileStore, StoreError};
use crate::model::{TaskId, ThemeMode, normalize_text};
use crate::ops::task_ops::{Action, Notice};
use crate::ops::views::{ViewKind, view};

pub use config::cmd_config;

/// Errors reported by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("task text is empty")]
    EmptyText,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Save(#[from] SaveFailed),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not format output: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    let Some(command) = cli.command else {
        return Ok(());
    };

    let data_dir = cli.data_dir.as_deref();
    match command {
        Commands::List(args) => cmd_list(&open_session(data_dir)?, args, json),
        Commands::Add(args) => cmd_add(&mut open_session(data_dir)?, args, json),
        Commands::Edit(args) => cmd_edit(&mut open_session(data_dir)?, args, json),
        Commands::Done(arg) => {
            cmd_by_id(&mut open_session(data_dir)?, arg.id, Action::ToggleCompleted, json)
        }
        Commands::Star(arg) => {
            cmd_by_id(&mut open_session(data_dir)?, arg.id, Action::ToggleImportant, json)
        }
        Commands::Archive(arg) => {
            cmd_by_id(&mut open_session(data_dir)?, arg.id, Action::ToggleArchived, json)
        }
        Commands::Rm(arg) => cmd_by_id(&mut open_session(data_dir)?, arg.id, Action::Remove, json),
        Commands::Theme(args) => cmd_theme(&mut open_session(data_dir)?, args, json),
        // Config commands work without opening the store
        Commands::Config(cmd) => cmd_config(cmd, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_session(data_dir: Option<&Path>) -> Result<Session<FileStore>, CliError> {
    let config = read_config(&config_path())?;
    let dir = resolve_data_dir(data_dir, &config);
    let store = FileStore::open(&dir)?;
    tracing::info!(dir = %dir.display(), "opened task store");
    Ok(Session::load(store))
}

fn join_text(words: &[String]) -> Result<String, CliError> {
    normalize_text(&words.join(" ")).ok_or(CliError::EmptyText)
}

fn require_task(session: &Session<FileStore>, id: TaskId) -> Result<(), CliError> {
    match session.list().get(id) {
        Some(_) => Ok(()),
        None => Err(CliError::NotFound(id)),
    }
}

fn print_notice(notice: &Notice, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&notice_to_json(notice))?);
    } else {
        println!("{}", format_notice(notice));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(session: &Session<FileStore>, args: ListArgs, json: bool) -> Result<(), CliError> {
    let tasks = session.list().tasks();
    let kind = if args.completed {
        Some(ViewKind::Completed)
    } else if args.archived {
        Some(ViewKind::Archived)
    } else if args.all {
        None
    } else {
        Some(ViewKind::Active)
    };
    let shown = match kind {
        Some(kind) => view(tasks, kind),
        None => tasks.iter().collect(),
    };

    if json {
        let records: Vec<TaskJson> = shown.iter().map(|t| task_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if shown.is_empty() {
        if let Some(kind) = kind {
            println!("{}", kind.empty_text());
        }
        return Ok(());
    }
    for task in shown {
        println!("{}", format_task_line(task));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(session: &mut Session<FileStore>, args: AddArgs, json: bool) -> Result<(), CliError> {
    let text = join_text(&args.text)?;
    let notice = session
        .dispatch(Action::Add(text))?
        .ok_or(CliError::EmptyText)?;
    print_notice(&notice, json)
}

fn cmd_edit(session: &mut Session<FileStore>, args: EditArgs, json: bool) -> Result<(), CliError> {
    require_task(session, args.id)?;
    let text = join_text(&args.text)?;
    let notice = session
        .dispatch(Action::Edit { id: args.id, text })?
        .ok_or(CliError::NotFound(args.id))?;
    print_notice(&notice, json)
}

/// Flag toggles and removal: all take an id and fail the same way
fn cmd_by_id(
    session: &mut Session<FileStore>,
    id: TaskId,
    action: fn(TaskId) -> Action,
    json: bool,
) -> Result<(), CliError> {
    require_task(session, id)?;
    let notice = session.dispatch(action(id))?.ok_or(CliError::NotFound(id))?;
    print_notice(&notice, json)
}

fn cmd_theme(session: &mut Session<FileStore>, args: ThemeArgs, json: bool) -> Result<(), CliError> {
    let mode = match args.mode {
        None => session.theme(),
        Some(ThemeChoice::Toggle) => session.toggle_theme()?,
        Some(ThemeChoice::Dark) => {
            session.set_theme(ThemeMode::Dark)?;
            ThemeMode::Dark
        }
        Some(ThemeChoice::Light) => {
            session.set_theme(ThemeMode::Light)?;
            ThemeMode::Light
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&theme_to_json(mode))?);
    } else {
        println!("{}", mode.as_str());
    }
    Ok(())
}
