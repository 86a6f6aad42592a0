//! Path-based navigation surface.
//!
//! # Invariants
//! - `/` is the list view; `/todo/{segment}` is the detail view.
//! - The detail segment is kept raw; malformed ids resolve to not-found in
//!   the detail view rather than failing here.

use crate::model::task::TaskId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static DETAIL_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/todo/([^/]*)/?$").expect("valid detail path regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// Raw `{id}` path segment.
    Detail(String),
}

impl Route {
    /// Parses a navigation path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Self::List);
        }
        DETAIL_PATH_RE
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|segment| Self::Detail(segment.as_str().to_string()))
    }

    /// Route of the detail view for `id`.
    pub fn detail(id: TaskId) -> Self {
        Self::Detail(id.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Detail(segment) => format!("/todo/{segment}"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}
