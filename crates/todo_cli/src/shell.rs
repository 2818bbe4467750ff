//! Line-oriented shell: one command per stdin line.

use std::error::Error;
use std::io::{BufRead, Write};
use todo_core::{CommandOutcome, TodoCommand, TodoController, TodoObserver, TodoStore, TodoView};
use uuid::Uuid;

const HELP: &str = "commands: add <text> | edit <id> <text> | toggle <id> | delete <id> | list | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellLine {
    /// Typed text for the input field, submitted like a form.
    Input(String),
    Command(TodoCommand),
    List,
    Help,
    Quit,
    Blank,
}

pub fn run_shell<S, V, O, R, E>(
    controller: &mut TodoController<S, V, O>,
    input: R,
    mut err_out: E,
) -> Result<(), Box<dyn Error>>
where
    S: TodoStore,
    V: TodoView,
    O: TodoObserver,
    R: BufRead,
    E: Write,
{
    for line in input.lines() {
        let line = line?;
        let parsed = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(message) => {
                writeln!(err_out, "{message}")?;
                continue;
            }
        };

        let outcome = match parsed {
            ShellLine::Quit => break,
            ShellLine::Blank => continue,
            ShellLine::Help => {
                writeln!(err_out, "{HELP}")?;
                continue;
            }
            ShellLine::List => {
                controller.render();
                continue;
            }
            ShellLine::Input(text) => {
                controller.view_mut().set_input_value(&text);
                controller.dispatch(TodoCommand::Submit)
            }
            ShellLine::Command(command) => controller.dispatch(command),
        };

        if let CommandOutcome::PersistFailed(_) = outcome {
            writeln!(err_out, "changes could not be saved")?;
        }
    }
    Ok(())
}

fn parse_line(line: &str) -> Result<ShellLine, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellLine::Blank);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb.to_ascii_lowercase().as_str() {
        "add" => Ok(ShellLine::Input(rest.to_string())),
        "edit" => {
            let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Ok(ShellLine::Command(TodoCommand::Edit {
                id: parse_id(id)?,
                text: text.trim().to_string(),
            }))
        }
        "toggle" => Ok(ShellLine::Command(TodoCommand::Toggle(parse_id(rest)?))),
        "delete" | "rm" => Ok(ShellLine::Command(TodoCommand::Delete(parse_id(rest)?))),
        "list" | "ls" => Ok(ShellLine::List),
        "help" | "?" => Ok(ShellLine::Help),
        "quit" | "exit" => Ok(ShellLine::Quit),
        other => Err(format!("unknown command `{other}`; {HELP}")),
    }
}

fn parse_id(value: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid todo id `{}`", value.trim()))
}
