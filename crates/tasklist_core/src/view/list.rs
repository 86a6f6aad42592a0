//! List view controller.
//!
//! # Responsibility
//! - Own the task store for the list screen and the new-task draft.
//! - Gate delete and edit behind a single confirmation prompt.
//!
//! # Invariants
//! - At most one prompt is staged; staging a new one replaces the old.
//! - A staged edit is a copy; the store is untouched until `save_edit`.
//! - Confirm and cancel always leave `Modal::None` behind, except a save
//!   with blank staged text, which keeps the prompt open.

use crate::kv::KvStore;
use crate::model::task::{normalize_text, Task, TaskId};
use crate::route::Route;
use crate::store::task_store::{StoreResult, TaskStore};
use log::debug;

/// Confirmation state of the list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    ConfirmDelete(TaskId),
    /// Staged copy of the task being edited.
    ConfirmEdit(Task),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: TaskId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    ConfirmDelete { id: TaskId },
    ConfirmEdit { id: TaskId, text: String },
}

/// Render model of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListScreen {
    pub rows: Vec<ListRow>,
    pub draft: String,
    pub prompt: Option<Prompt>,
}

pub struct ListView<'kv> {
    store: TaskStore<'kv>,
    draft: String,
    modal: Modal,
}

impl<'kv> ListView<'kv> {
    /// Mounts the list screen, loading tasks from `kv`.
    pub fn mount(kv: &'kv dyn KvStore) -> StoreResult<Self> {
        Ok(Self::with_store(TaskStore::open(kv)?))
    }

    pub fn with_store(store: TaskStore<'kv>) -> Self {
        Self {
            store,
            draft: String::new(),
            modal: Modal::None,
        }
    }

    pub fn store(&self) -> &TaskStore<'kv> {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Adds the draft as a new task.
    ///
    /// The draft is cleared only when the task was admitted.
    pub fn submit_draft(&mut self) -> StoreResult<Option<TaskId>> {
        let added = self.store.add(&self.draft)?;
        if added.is_some() {
            self.draft.clear();
        }
        Ok(added)
    }

    /// Stages `id` for deletion. Returns `false` when no such task exists.
    pub fn request_delete(&mut self, id: TaskId) -> bool {
        if self.store.find_by_id(id).is_none() {
            return false;
        }
        self.stage(Modal::ConfirmDelete(id));
        true
    }

    /// Deletes the staged task. Returns `false` when nothing was staged.
    pub fn confirm_delete(&mut self) -> StoreResult<bool> {
        let Modal::ConfirmDelete(id) = &self.modal else {
            return Ok(false);
        };
        let id = *id;
        self.store.remove(id)?;
        self.modal = Modal::None;
        Ok(true)
    }

    pub fn cancel_delete(&mut self) {
        if matches!(self.modal, Modal::ConfirmDelete(_)) {
            self.modal = Modal::None;
        }
    }

    /// Stages a copy of task `id` for editing.
    pub fn request_edit(&mut self, id: TaskId) -> bool {
        let Some(task) = self.store.find_by_id(id) else {
            return false;
        };
        let mut staged = task.clone();
        staged.is_editing = true;
        self.stage(Modal::ConfirmEdit(staged));
        true
    }

    /// Replaces the text of the staged copy only.
    pub fn edit_text(&mut self, text: impl Into<String>) -> bool {
        match &mut self.modal {
            Modal::ConfirmEdit(staged) => {
                staged.text = text.into();
                true
            }
            _ => false,
        }
    }

    /// Writes the staged text to the store.
    ///
    /// Returns `Ok(false)` when nothing was staged or the staged text is
    /// blank; a blank edit keeps the prompt open.
    pub fn save_edit(&mut self) -> StoreResult<bool> {
        let Modal::ConfirmEdit(staged) = &self.modal else {
            return Ok(false);
        };
        if normalize_text(&staged.text).is_none() {
            debug!("event=edit_save module=view status=rejected reason=blank_text");
            return Ok(false);
        }
        let (id, text) = (staged.id, staged.text.clone());
        let updated = self.store.update(id, &text)?;
        self.modal = Modal::None;
        Ok(updated)
    }

    pub fn cancel_edit(&mut self) {
        if matches!(self.modal, Modal::ConfirmEdit(_)) {
            self.modal = Modal::None;
        }
    }

    /// Route of the detail screen for `id`.
    pub fn see_more(&self, id: TaskId) -> Route {
        Route::detail(id)
    }

    pub fn render(&self) -> ListScreen {
        let rows = self
            .store
            .tasks()
            .iter()
            .map(|task| ListRow {
                id: task.id,
                text: task.text.clone(),
            })
            .collect();
        let prompt = match &self.modal {
            Modal::None => None,
            Modal::ConfirmDelete(id) => Some(Prompt::ConfirmDelete { id: *id }),
            Modal::ConfirmEdit(staged) => Some(Prompt::ConfirmEdit {
                id: staged.id,
                text: staged.text.clone(),
            }),
        };
        ListScreen {
            rows,
            draft: self.draft.clone(),
            prompt,
        }
    }

    fn stage(&mut self, modal: Modal) {
        if self.modal != Modal::None {
            debug!("event=modal_replace module=view status=ok");
        }
        self.modal = modal;
    }
}
