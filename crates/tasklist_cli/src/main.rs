//! `tasklist` terminal front end.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Open the SQLite-backed slot and hand it to the core views.
//! - Map failures to a non-zero exit code without panicking.

mod cli;
mod commands;
mod error;
mod render;
mod shell;

use clap::Parser;
use cli::{Cli, Command};
use error::CliResult;
use log::{info, warn};
use shell::Shell;
use std::io::{self, Write};
use std::process::ExitCode;
use tasklist_core::{init_logging, KvStore, SqliteKvStore, TaskId};

fn main() -> ExitCode {
    let cli = Cli::parse();
    start_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging(cli: &Cli) {
    let Some(log_dir) = &cli.log_dir else {
        return;
    };
    if let Err(err) = init_logging(cli.log_level(), &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let db_path = cli.db_path();
    let kv = SqliteKvStore::open(&db_path)?;
    info!(
        "event=cli_start module=cli status=ok db_path={} core_version={}",
        db_path.display(),
        tasklist_core::core_version()
    );
    dispatch(&kv, cli.command())
}

fn dispatch(kv: &dyn KvStore, command: Command) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Shell => {
            let mut shell = Shell::start(kv)?;
            shell.run(io::stdin().lock(), &mut out)?;
        }
        Command::List => commands::list(kv, &mut out)?,
        Command::Add { text } => commands::add(kv, &text.join(" "), &mut out)?,
        Command::Edit { id, text } => {
            commands::edit(kv, TaskId::new(id), &text.join(" "), &mut out)?;
        }
        Command::Delete { id, yes } => {
            commands::delete(kv, TaskId::new(id), yes, &mut io::stdin().lock(), &mut out)?;
        }
        Command::Show { target } => commands::show(kv, &target, &mut out)?,
    }
    if let Err(err) = out.flush() {
        warn!("event=cli_flush module=cli status=error error={err}");
    }
    Ok(())
}
