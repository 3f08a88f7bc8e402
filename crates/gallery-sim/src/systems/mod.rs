//! ECS systems that operate on the target world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all per-entity state lives in components.

pub mod cleanup;
pub mod effects;
pub mod hit_test;
pub mod snapshot;
pub mod spawner;
pub mod traversal;
