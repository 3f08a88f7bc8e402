//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Components do not implement `Deserialize`: live entities are only
//! created by the spawner, never restored from serialized state.

use crate::enums::*;
use crate::types::Point;

/// A shootable target.
#[derive(Debug, Clone)]
pub struct Target {
    /// Unique id; also the z-order (higher is on top).
    pub target_id: u32,
    pub category: Category,
    pub size_class: SizeClass,
    pub lane: Lane,
    pub glyph: &'static str,
}

/// One-shot linear movement from `from` to `to`.
/// The entity is removed when the traversal completes.
#[derive(Debug, Clone)]
pub struct Traversal {
    pub from: Point,
    pub to: Point,
    pub duration_secs: f64,
    pub elapsed_secs: f64,
}

/// Alpha fade to zero; the entity is removed when it completes.
#[derive(Debug, Clone)]
pub struct FadeOut {
    pub duration_secs: f64,
    pub elapsed_secs: f64,
}

/// A short-lived particle emitter.
#[derive(Debug, Clone)]
pub struct Effect {
    pub kind: EffectKind,
    pub remaining_secs: f64,
}
