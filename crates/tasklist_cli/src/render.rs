//! Plain-text rendering of screen models.

use std::fmt::{self, Write};
use tasklist_core::view::{
    BACK_LABEL, DELETE_PROMPT, DETAIL_TITLE, DRAFT_PLACEHOLDER, EDIT_PROMPT, LIST_TITLE,
    NOT_FOUND_MESSAGE,
};
use tasklist_core::{App, DetailScreen, ListScreen, Prompt, Screen};

pub fn render_app(app: &App<'_>) -> String {
    match app.screen() {
        Screen::List(view) => render_list(&view.render()),
        Screen::Detail(view) => render_detail(view.screen()),
    }
}

pub fn render_list(screen: &ListScreen) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    if write_list(&mut out, screen).is_err() {
        out.clear();
    }
    out
}

fn write_list(out: &mut String, screen: &ListScreen) -> fmt::Result {
    writeln!(out, "{LIST_TITLE}")?;
    writeln!(out, "{}", "=".repeat(LIST_TITLE.len()))?;

    if screen.draft.is_empty() {
        writeln!(out, "new: ({DRAFT_PLACEHOLDER})")?;
    } else {
        writeln!(out, "new: {}", screen.draft)?;
    }

    if screen.rows.is_empty() {
        writeln!(out, "(no tasks)")?;
    } else {
        let width = screen.rows.len().to_string().len();
        for (index, row) in screen.rows.iter().enumerate() {
            writeln!(out, "{:>width$}. {}", index + 1, row.text)?;
        }
    }

    match &screen.prompt {
        None => {}
        Some(Prompt::ConfirmDelete { id }) => {
            writeln!(out)?;
            writeln!(out, "{DELETE_PROMPT}")?;
            if let Some(row) = screen.rows.iter().find(|row| row.id == *id) {
                writeln!(out, "  {}", row.text)?;
            }
            writeln!(out, "[yes] Yes, Delete  [no] No")?;
        }
        Some(Prompt::ConfirmEdit { text, .. }) => {
            writeln!(out)?;
            writeln!(out, "{EDIT_PROMPT}")?;
            writeln!(out, "  > {text}")?;
            writeln!(out, "[save] Change  [cancel] No")?;
        }
    }
    Ok(())
}

pub fn render_detail(screen: &DetailScreen) -> String {
    match screen {
        DetailScreen::Found { text, .. } => {
            format!(
                "{DETAIL_TITLE}\n{}\n{text}\n\n[back] {BACK_LABEL}\n",
                "=".repeat(DETAIL_TITLE.len())
            )
        }
        DetailScreen::NotFound => format!("{NOT_FOUND_MESSAGE}\n"),
    }
}
