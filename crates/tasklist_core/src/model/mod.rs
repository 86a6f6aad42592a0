//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by the store and both views.
//! - Provide pure sequence transforms used by the store.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` unique within one store.
//! - Sequence order is insertion order; transforms never reorder.

pub mod task;
pub mod task_list;
