//! Command-line adapter for `todo_core`.
//!
//! # Responsibility
//! - Translate argv or stdin lines into controller commands.
//! - Pick the store backend from environment plus flag overrides.

mod shell;

use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use todo_core::config::{ENV_DB_PATH, ENV_TASKS_FILE};
use todo_core::db::open_db;
use todo_core::{
    init_logging, CommandOutcome, JsonFileTodoStore, LogObserver, LogSettings, MemoryTodoStore,
    SqliteTodoStore, StoreSettings, TextView, TodoCommand, TodoConfig, TodoController, TodoRow,
    TodoStore, TodoView,
};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Minimal todo list")]
struct Cli {
    /// Store backend: memory, json or sqlite (overrides TODO_STORE).
    #[arg(long)]
    store: Option<String>,
    /// File for the json or sqlite store.
    #[arg(long)]
    path: Option<PathBuf>,
    /// trace|debug|info|warn|error (overrides TODO_LOG_LEVEL).
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rotating log files (overrides TODO_LOG_DIR).
    #[arg(long)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the list.
    List,
    /// Add a todo.
    Add { text: Vec<String> },
    /// Replace the text of a todo.
    Edit { id: Uuid, text: Vec<String> },
    /// Flip the done flag of a todo.
    Toggle { id: Uuid },
    /// Remove a todo.
    Delete { id: Uuid },
    /// Read one command per line from stdin.
    Shell,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("todo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli, |key| std::env::var(key).ok())?;
    init_logging(&config.log)?;
    info!(
        "event=cli_start module=cli status=ok app=\"{}\" version={}",
        todo_core::config::APP_NAME,
        todo_core::core_version()
    );

    let conn;
    let store: Box<dyn TodoStore + '_> = match &config.store {
        StoreSettings::Memory => Box::new(MemoryTodoStore::new()),
        StoreSettings::Json(path) => Box::new(JsonFileTodoStore::new(path.clone())),
        StoreSettings::Sqlite(path) => {
            conn = open_db(path)?;
            Box::new(SqliteTodoStore::new(&conn))
        }
    };

    if let Command::Shell = cli.command {
        let stdin = io::stdin();
        let view = TextView::new(io::stdout());
        let mut controller = TodoController::new(store, view, LogObserver);
        controller.initialize();
        return shell::run_shell(&mut controller, stdin.lock(), io::stderr());
    }

    let mut controller = TodoController::new(store, LatestRowsView::default(), LogObserver);
    controller.initialize();

    let outcome = match cli.command {
        Command::List | Command::Shell => None,
        Command::Add { text } => {
            controller.view_mut().set_input_value(&text.join(" "));
            Some(controller.dispatch(TodoCommand::Submit))
        }
        Command::Edit { id, text } => Some(controller.dispatch(TodoCommand::Edit {
            id,
            text: text.join(" "),
        })),
        Command::Toggle { id } => Some(controller.dispatch(TodoCommand::Toggle(id))),
        Command::Delete { id } => Some(controller.dispatch(TodoCommand::Delete(id))),
    };

    let mut out = TextView::new(io::stdout());
    out.show_rows(&controller.view().rows);

    match outcome {
        Some(CommandOutcome::PersistFailed(_)) => Err("changes could not be saved".into()),
        _ => Ok(()),
    }
}

fn resolve_config<F>(cli: &Cli, lookup: F) -> Result<TodoConfig, Box<dyn Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = TodoConfig::from_lookup(&lookup)?;

    if let Some(kind) = cli.store.as_deref() {
        let path_key = match kind.trim().to_ascii_lowercase().as_str() {
            "sqlite" => ENV_DB_PATH,
            _ => ENV_TASKS_FILE,
        };
        let env_path = lookup(path_key)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        config.store = StoreSettings::parse(kind, cli.path.clone().or(env_path))?;
    } else if let Some(path) = cli.path.clone() {
        config.store = match config.store {
            StoreSettings::Memory => StoreSettings::Memory,
            StoreSettings::Json(_) => StoreSettings::Json(path),
            StoreSettings::Sqlite(_) => StoreSettings::Sqlite(path),
        };
    }

    if cli.log_level.is_some() || cli.log_dir.is_some() {
        let level = cli.log_level.as_deref().unwrap_or(config.log.level);
        let dir = cli.log_dir.clone().or(config.log.dir.take());
        config.log = LogSettings::new(level, dir)?;
    }

    Ok(config)
}

/// Keeps the last rendered rows so one-shot commands print the list once.
#[derive(Debug, Default)]
struct LatestRowsView {
    rows: Vec<TodoRow>,
    input: String,
}

impl TodoView for LatestRowsView {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn show_rows(&mut self, rows: &[TodoRow]) {
        self.rows = rows.to_vec();
    }
}
