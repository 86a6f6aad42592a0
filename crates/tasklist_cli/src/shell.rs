//! Interactive session over the app router.
//!
//! Rows are addressed by their 1-based position on the list screen; the
//! shell resolves positions to task ids before calling the view.

use crate::error::CliResult;
use crate::render::render_app;
use std::io::{BufRead, Write};
use tasklist_core::store::task_store::StoreResult;
use tasklist_core::{App, KvStore, Route, TaskId};

const HELP: &str = "\
list view:
  add <text>     add a task
  edit <n>       stage task n for editing
  text <text>    change the staged text
  save | cancel  confirm or discard the edit
  delete <n>     stage task n for deletion
  yes | no       confirm or discard the deletion
  open <n>       show details of task n
detail view:
  back           return to the list
anywhere:
  go <path>      navigate to / or /todo/<id>
  list           redraw the current screen
  help | quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Edit(usize),
    Text(String),
    Save,
    Delete(usize),
    Yes,
    No,
    Cancel,
    Open(usize),
    Go(String),
    Back,
    List,
    Help,
    Quit,
    Empty,
}

/// Parses one input line.
///
/// Returns a user-facing message for malformed input.
pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "add" => ShellCommand::Add(rest.to_string()),
        "edit" => ShellCommand::Edit(parse_row(rest)?),
        "text" => ShellCommand::Text(rest.to_string()),
        "save" => ShellCommand::Save,
        "delete" | "rm" => ShellCommand::Delete(parse_row(rest)?),
        "yes" | "y" => ShellCommand::Yes,
        "no" | "n" => ShellCommand::No,
        "cancel" => ShellCommand::Cancel,
        "open" | "more" => ShellCommand::Open(parse_row(rest)?),
        "go" => ShellCommand::Go(rest.to_string()),
        "back" => ShellCommand::Back,
        "list" | "ls" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(command)
}

fn parse_row(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(row) if row > 0 => Ok(row),
        _ => Err(format!("expected a row number, got `{raw}`")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'kv> {
    app: App<'kv>,
}

impl<'kv> Shell<'kv> {
    pub fn start(kv: &'kv dyn KvStore) -> StoreResult<Self> {
        Ok(Self {
            app: App::start(kv)?,
        })
    }

    pub fn app(&self) -> &App<'kv> {
        &self.app
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> CliResult<()> {
        write!(out, "{}", render_app(&self.app))?;
        for line in input.lines() {
            let line = line?;
            let flow = match parse_command(&line) {
                Ok(command) => self.execute(command, out)?,
                Err(message) => {
                    writeln!(out, "{message}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> CliResult<Flow> {
        match command {
            ShellCommand::Empty => return Ok(Flow::Continue),
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Help => {
                write!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            ShellCommand::List => {}
            ShellCommand::Go(path) => {
                if !self.app.navigate_path(&path)? {
                    writeln!(out, "unknown route: {path}")?;
                    return Ok(Flow::Continue);
                }
            }
            ShellCommand::Back => {
                if self.app.detail().is_none() {
                    writeln!(out, "already on the list")?;
                    return Ok(Flow::Continue);
                }
                self.app.back()?;
            }
            ShellCommand::Open(row) => {
                let Some(id) = self.row_id(row) else {
                    return self.no_such_row(row, out);
                };
                let route = Route::detail(id);
                self.app.navigate(route)?;
            }
            other => {
                if !self.apply_list_command(other, out)? {
                    return Ok(Flow::Continue);
                }
            }
        }
        write!(out, "{}", render_app(&self.app))?;
        Ok(Flow::Continue)
    }

    /// Returns whether the screen should be redrawn.
    fn apply_list_command(
        &mut self,
        command: ShellCommand,
        out: &mut impl Write,
    ) -> CliResult<bool> {
        let row_id = match &command {
            ShellCommand::Edit(row) | ShellCommand::Delete(row) => match self.row_id(*row) {
                Some(id) => Some(id),
                None => {
                    self.no_such_row(*row, out)?;
                    return Ok(false);
                }
            },
            _ => None,
        };

        let Some(view) = self.app.list_mut() else {
            writeln!(out, "not on the list; type `back` first")?;
            return Ok(false);
        };

        match (command, row_id) {
            (ShellCommand::Add(text), _) => {
                view.set_draft(text);
                if view.submit_draft()?.is_none() {
                    writeln!(out, "task text is empty")?;
                }
            }
            (ShellCommand::Edit(_), Some(id)) => {
                view.request_edit(id);
            }
            (ShellCommand::Delete(_), Some(id)) => {
                view.request_delete(id);
            }
            (ShellCommand::Text(text), _) => {
                if !view.edit_text(text) {
                    writeln!(out, "no edit in progress")?;
                    return Ok(false);
                }
            }
            (ShellCommand::Save, _) => {
                let staged = matches!(view.modal(), tasklist_core::Modal::ConfirmEdit(_));
                if !view.save_edit()? && staged {
                    writeln!(out, "task text is empty")?;
                }
            }
            (ShellCommand::Yes, _) => {
                view.confirm_delete()?;
            }
            (ShellCommand::No, _) => {
                view.cancel_delete();
                view.cancel_edit();
            }
            (ShellCommand::Cancel, _) => {
                view.cancel_edit();
                view.cancel_delete();
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn row_id(&self, row: usize) -> Option<TaskId> {
        self.app
            .list()
            .and_then(|view| view.tasks().get(row.checked_sub(1)?))
            .map(|task| task.id)
    }

    fn no_such_row(&self, row: usize, out: &mut impl Write) -> CliResult<Flow> {
        if self.app.list().is_some() {
            writeln!(out, "no task in row {row}")?;
        } else {
            writeln!(out, "not on the list; type `back` first")?;
        }
        Ok(Flow::Continue)
    }
}
