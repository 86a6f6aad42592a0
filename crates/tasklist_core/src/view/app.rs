//! Client-side router binding routes to view controllers.
//!
//! # Invariants
//! - Every navigation mounts a fresh view; no view state survives it.
//! - Unknown paths leave the current screen untouched.

use crate::kv::KvStore;
use crate::route::Route;
use crate::store::task_store::StoreResult;
use crate::view::detail::DetailView;
use crate::view::list::ListView;
use log::{debug, info};

pub enum Screen<'kv> {
    List(ListView<'kv>),
    Detail(DetailView),
}

pub struct App<'kv> {
    kv: &'kv dyn KvStore,
    route: Route,
    screen: Screen<'kv>,
}

impl<'kv> App<'kv> {
    /// Starts on the list view.
    pub fn start(kv: &'kv dyn KvStore) -> StoreResult<Self> {
        Self::open(kv, Route::List)
    }

    /// Starts on `route`.
    pub fn open(kv: &'kv dyn KvStore, route: Route) -> StoreResult<Self> {
        let screen = mount(kv, &route)?;
        Ok(Self { kv, route, screen })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen<'kv> {
        &self.screen
    }

    pub fn list(&self) -> Option<&ListView<'kv>> {
        match &self.screen {
            Screen::List(view) => Some(view),
            Screen::Detail(_) => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut ListView<'kv>> {
        match &mut self.screen {
            Screen::List(view) => Some(view),
            Screen::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailView> {
        match &self.screen {
            Screen::Detail(view) => Some(view),
            Screen::List(_) => None,
        }
    }

    pub fn navigate(&mut self, route: Route) -> StoreResult<()> {
        let screen = mount(self.kv, &route)?;
        info!(
            "event=navigate module=router status=ok path={}",
            route.path()
        );
        self.route = route;
        self.screen = screen;
        Ok(())
    }

    /// Navigates to `path`. Returns `Ok(false)` for unknown paths.
    pub fn navigate_path(&mut self, path: &str) -> StoreResult<bool> {
        match Route::parse(path) {
            Some(route) => {
                self.navigate(route)?;
                Ok(true)
            }
            None => {
                debug!("event=navigate module=router status=unknown_route");
                Ok(false)
            }
        }
    }

    /// Follows the detail view's back affordance. No-op on the list view.
    pub fn back(&mut self) -> StoreResult<()> {
        let target = match &self.screen {
            Screen::Detail(view) => view.back(),
            Screen::List(_) => return Ok(()),
        };
        self.navigate(target)
    }
}

fn mount<'kv>(kv: &'kv dyn KvStore, route: &Route) -> StoreResult<Screen<'kv>> {
    match route {
        Route::List => Ok(Screen::List(ListView::mount(kv)?)),
        Route::Detail(segment) => Ok(Screen::Detail(DetailView::activate(kv, segment)?)),
    }
}
