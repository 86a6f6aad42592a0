//! Command-line surface and configuration resolution.
//!
//! Every flag has an environment fallback; nothing is read from config
//! files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_core::default_log_level;

const DB_DIR_NAME: &str = "tasklist";
const DB_FILE_NAME: &str = "tasklist.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about = "A small task list persisted in SQLite")]
pub struct Cli {
    /// SQLite file holding the task slot.
    #[arg(long, env = "TASKLIST_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "TASKLIST_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "TASKLIST_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive session (default).
    Shell,
    /// Print the task list.
    List,
    /// Add a task.
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Replace the text of a task.
    Edit {
        id: i64,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a task after confirmation.
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show one task by id or by `/todo/{id}` path.
    Show { target: String },
}

impl Cli {
    pub fn db_path(&self) -> PathBuf {
        resolve_db_path(self.db.clone())
    }

    /// Explicit level, else the build-mode default.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }
}

/// Explicit path, else `<data_local_dir>/tasklist/tasklist.sqlite3`, else
/// the temp dir.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
        return path;
    }
    dirs::data_local_dir()
        .map(|dir| dir.join(DB_DIR_NAME).join(DB_FILE_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::{resolve_db_path, Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;
    use tasklist_core::default_log_level;

    #[test]
    fn defaults_to_shell() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert_eq!(cli.command(), Command::Shell);
    }

    #[test]
    fn parses_subcommands_with_multiword_text() {
        let cli = Cli::try_parse_from(["tasklist", "add", "Buy", "milk"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Add {
                text: vec!["Buy".to_string(), "milk".to_string()]
            }
        );

        let cli = Cli::try_parse_from(["tasklist", "delete", "42", "--yes"]).unwrap();
        assert_eq!(cli.command(), Command::Delete { id: 42, yes: true });
    }

    #[test]
    fn log_level_falls_back_to_build_default() {
        let cli = Cli {
            db: None,
            log_level: None,
            log_dir: None,
            command: None,
        };
        assert_eq!(cli.log_level(), default_log_level());

        let cli = Cli::try_parse_from(["tasklist", "--log-level", "warn", "list"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn explicit_db_path_wins() {
        let cli = Cli::try_parse_from(["tasklist", "--db", "/tmp/custom.sqlite3", "list"]).unwrap();
        assert_eq!(cli.db_path(), PathBuf::from("/tmp/custom.sqlite3"));
    }

    #[test]
    fn default_db_path_ends_with_file_name() {
        assert!(resolve_db_path(None).ends_with("tasklist.sqlite3"));
        assert!(resolve_db_path(Some(PathBuf::new())).ends_with("tasklist.sqlite3"));
    }
}
