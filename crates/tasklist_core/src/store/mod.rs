//! Task store: the in-memory task sequence mirrored to the durable slot.
//!
//! # Responsibility
//! - Load and save the full task sequence through the injected `KvStore`.
//! - Apply add/remove/update and persist a full snapshot after each one.
//! - Assign task ids without same-tick collisions.
//!
//! # Invariants
//! - After every successful mutation the slot holds exactly `tasks()`.
//! - A failed save leaves the in-memory sequence unchanged.

pub mod id_gen;
pub mod task_store;
