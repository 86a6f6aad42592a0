//! Task store over an injected key-value port.
//!
//! # Responsibility
//! - Own the ordered task sequence for one session.
//! - Keep the `todos` slot in sync with every mutation.
//!
//! # Invariants
//! - Missing or malformed slot content loads as an empty sequence.
//! - Mutations are applied to a copy, saved, then committed.
//! - Rejected or no-op operations do not write to the slot.

use crate::kv::{KvError, KvStore};
use crate::model::task::{normalize_text, Task, TaskId};
use crate::model::task_list;
use crate::store::id_gen::IdGenerator;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the durable slot holding the task sequence.
pub const TODOS_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Kv(KvError),
    Encode(serde_json::Error),
    /// Every id above the largest stored one is taken.
    IdsExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
            Self::IdsExhausted => write!(f, "task id space exhausted"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::IdsExhausted => None,
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Reads the task sequence from the durable slot.
///
/// Only backend transport errors are returned; a missing or unparsable
/// slot yields an empty sequence.
pub fn load(kv: &dyn KvStore) -> StoreResult<Vec<Task>> {
    let Some(raw) = kv.get(TODOS_KEY)? else {
        debug!("event=store_load module=store status=ok source=empty count=0");
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<Task>>(&raw) {
        Ok(tasks) => {
            debug!(
                "event=store_load module=store status=ok source=slot count={}",
                tasks.len()
            );
            Ok(tasks)
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=fallback error_code=slot_malformed bytes={} error={}",
                raw.len(),
                err
            );
            Ok(Vec::new())
        }
    }
}

/// Overwrites the durable slot with the full sequence.
pub fn save(kv: &dyn KvStore, tasks: &[Task]) -> StoreResult<()> {
    let encoded = serde_json::to_string(tasks)?;
    kv.set(TODOS_KEY, &encoded)?;
    debug!(
        "event=store_save module=store status=ok count={}",
        tasks.len()
    );
    Ok(())
}

/// Session-scoped task store.
pub struct TaskStore<'kv> {
    kv: &'kv dyn KvStore,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl<'kv> TaskStore<'kv> {
    /// Loads the store from `kv` using wall-clock ids.
    pub fn open(kv: &'kv dyn KvStore) -> StoreResult<Self> {
        Self::open_with_ids(kv, IdGenerator::system())
    }

    /// Loads the store from `kv` with a caller-provided id generator.
    pub fn open_with_ids(kv: &'kv dyn KvStore, mut ids: IdGenerator) -> StoreResult<Self> {
        let tasks = load(kv)?;
        if let Some(max) = task_list::max_id(&tasks) {
            ids.observe(max);
        }
        Ok(Self { kv, tasks, ids })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replaces the in-memory sequence with the current slot content.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.tasks = load(self.kv)?;
        if let Some(max) = task_list::max_id(&self.tasks) {
            self.ids.observe(max);
        }
        Ok(())
    }

    /// Appends a task unless `text` is blank.
    ///
    /// Returns `Ok(None)` for rejected input.
    pub fn add(&mut self, text: &str) -> StoreResult<Option<TaskId>> {
        if normalize_text(text).is_none() {
            debug!("event=task_add module=store status=rejected reason=blank_text");
            return Ok(None);
        }

        let Some(id) = self.ids.next_id() else {
            warn!("event=task_add module=store status=error error_code=ids_exhausted");
            return Err(StoreError::IdsExhausted);
        };
        let added = self.commit(|tasks| task_list::append(tasks, id, text).is_some())?;
        if added {
            info!("event=task_add module=store status=ok id={id}");
            Ok(Some(id))
        } else {
            Ok(None)
        }
    }

    /// Removes the task with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: TaskId) -> StoreResult<bool> {
        let removed = self.commit(|tasks| task_list::remove(tasks, id))?;
        if removed {
            info!("event=task_remove module=store status=ok id={id}");
        } else {
            debug!("event=task_remove module=store status=noop id={id}");
        }
        Ok(removed)
    }

    /// Replaces the text of the task with `id`.
    ///
    /// Absent ids and blank text are a no-op.
    pub fn update(&mut self, id: TaskId, text: &str) -> StoreResult<bool> {
        let updated = self.commit(|tasks| task_list::update_text(tasks, id, text))?;
        if updated {
            info!("event=task_update module=store status=ok id={id}");
        } else {
            debug!("event=task_update module=store status=noop id={id}");
        }
        Ok(updated)
    }

    pub fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        task_list::find_by_id(&self.tasks, id)
    }

    fn commit(&mut self, apply: impl FnOnce(&mut Vec<Task>) -> bool) -> StoreResult<bool> {
        let mut next = self.tasks.clone();
        if !apply(&mut next) {
            return Ok(false);
        }
        save(self.kv, &next)?;
        self.tasks = next;
        Ok(true)
    }
}
