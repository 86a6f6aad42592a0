//! One-shot subcommands.
//!
//! Each command mounts the same view controllers the shell uses, so the
//! confirmation and not-found behavior is identical in both modes.

use crate::error::{CliError, CliResult};
use crate::render::{render_detail, render_list};
use std::io::{BufRead, Write};
use tasklist_core::view::{DELETE_PROMPT, NOT_FOUND_MESSAGE};
use tasklist_core::{DetailView, KvStore, ListView, Route, TaskId};

pub fn list(kv: &dyn KvStore, out: &mut impl Write) -> CliResult<()> {
    let view = ListView::mount(kv)?;
    write!(out, "{}", render_list(&view.render()))?;
    Ok(())
}

pub fn add(kv: &dyn KvStore, text: &str, out: &mut impl Write) -> CliResult<()> {
    let mut view = ListView::mount(kv)?;
    view.set_draft(text);
    match view.submit_draft()? {
        Some(id) => writeln!(out, "Added task {id}.")?,
        None => writeln!(out, "Nothing added: task text is empty.")?,
    }
    Ok(())
}

pub fn edit(kv: &dyn KvStore, id: TaskId, text: &str, out: &mut impl Write) -> CliResult<()> {
    let mut view = ListView::mount(kv)?;
    if !view.request_edit(id) {
        writeln!(out, "{NOT_FOUND_MESSAGE}")?;
        return Ok(());
    }
    view.edit_text(text);
    if view.save_edit()? {
        writeln!(out, "Task {id} updated.")?;
    } else {
        view.cancel_edit();
        writeln!(out, "Nothing changed: task text is empty.")?;
    }
    Ok(())
}

pub fn delete(
    kv: &dyn KvStore,
    id: TaskId,
    assume_yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut view = ListView::mount(kv)?;
    if !view.request_delete(id) {
        writeln!(out, "{NOT_FOUND_MESSAGE}")?;
        return Ok(());
    }

    let confirmed = assume_yes || {
        write!(out, "{DELETE_PROMPT} [y/N] ")?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        is_yes(&answer)
    };

    if confirmed {
        view.confirm_delete()?;
        writeln!(out, "Task {id} deleted.")?;
    } else {
        view.cancel_delete();
        writeln!(out, "Kept task {id}.")?;
    }
    Ok(())
}

/// Shows a task addressed either by bare id or by `/todo/{id}` path.
pub fn show(kv: &dyn KvStore, target: &str, out: &mut impl Write) -> CliResult<()> {
    let path = if target.starts_with('/') {
        target.to_string()
    } else {
        format!("/todo/{target}")
    };
    match Route::parse(&path) {
        Some(Route::Detail(segment)) => {
            let view = DetailView::activate(kv, &segment)?;
            write!(out, "{}", render_detail(view.screen()))?;
        }
        Some(Route::List) => list(kv, out)?,
        None => return Err(CliError::UnknownRoute(path)),
    }
    Ok(())
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
