//! View controllers for the list and detail screens.
//!
//! # Responsibility
//! - Translate user intent into task store operations.
//! - Produce render-ready screen models; drawing is left to front ends.
//!
//! # Invariants
//! - Views pass only task ids between each other, never task payloads.
//! - Each view mount re-reads the durable slot.

pub mod app;
pub mod detail;
pub mod list;

pub const LIST_TITLE: &str = "Todo List";
pub const DRAFT_PLACEHOLDER: &str = "Enter a new task...";
pub const DELETE_PROMPT: &str = "Do you really want to delete?";
pub const EDIT_PROMPT: &str = "Do you want to change your Task?";
pub const DETAIL_TITLE: &str = "Task Details";
pub const NOT_FOUND_MESSAGE: &str = "No task found!";
pub const BACK_LABEL: &str = "Go back";
