//! Key-value port for the durable slot.
//!
//! # Responsibility
//! - Define the storage contract the task store is constructed with.
//! - Provide an in-memory fake and a SQLite-backed implementation.
//!
//! # Invariants
//! - `set` replaces the whole value stored under a key.
//! - `get` on a missing key returns `Ok(None)`, never an error.
//! - Implementations are single-owner and not shared across threads.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type KvResult<T> = Result<T, KvError>;

/// Transport failure of a key-value backend.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    /// Failure reported by a non-SQLite backend.
    Backend(String),
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "key-value backend failure: {message}"),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String-keyed, string-valued durable storage.
pub trait KvStore {
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> KvResult<()>;
    fn remove(&self, key: &str) -> KvResult<()>;
}
