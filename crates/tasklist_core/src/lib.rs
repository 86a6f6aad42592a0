//! Core domain logic for the task list.
//! This crate is the single source of truth for task invariants and the
//! persistence contract of the durable slot.

pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod route;
pub mod store;
pub mod view;

pub use kv::{KvError, KvResult, KvStore, MemoryKvStore, SqliteKvStore};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use route::Route;
pub use store::id_gen::{Clock, IdGenerator, SystemClock};
pub use store::task_store::{StoreError, StoreResult, TaskStore, TODOS_KEY};
pub use view::app::{App, Screen};
pub use view::detail::{DetailScreen, DetailView};
pub use view::list::{ListRow, ListScreen, ListView, Modal, Prompt};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
