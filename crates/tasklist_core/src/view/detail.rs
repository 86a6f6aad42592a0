//! Detail view controller.
//!
//! Re-reads the durable slot on every activation; it keeps no state from
//! the list view.

use crate::kv::KvStore;
use crate::model::task::TaskId;
use crate::model::task_list;
use crate::route::Route;
use crate::store::task_store::{load, StoreResult};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailScreen {
    Found { id: TaskId, text: String },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    screen: DetailScreen,
}

impl DetailView {
    /// Activates the detail screen for the raw `/todo/{segment}` value.
    ///
    /// Malformed segments, deleted tasks and an empty store all resolve to
    /// [`DetailScreen::NotFound`].
    pub fn activate(kv: &dyn KvStore, segment: &str) -> StoreResult<Self> {
        let Some(id) = TaskId::parse_segment(segment) else {
            debug!("event=detail_open module=view status=not_found reason=malformed_id");
            return Ok(Self {
                screen: DetailScreen::NotFound,
            });
        };

        let tasks = load(kv)?;
        let screen = match task_list::find_by_id(&tasks, id) {
            Some(task) => DetailScreen::Found {
                id: task.id,
                text: task.text.clone(),
            },
            None => {
                debug!("event=detail_open module=view status=not_found id={id}");
                DetailScreen::NotFound
            }
        };
        Ok(Self { screen })
    }

    pub fn screen(&self) -> &DetailScreen {
        &self.screen
    }

    pub fn back(&self) -> Route {
        Route::List
    }
}
