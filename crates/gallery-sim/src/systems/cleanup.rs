//! Cleanup system: removes entities queued by the animation systems,
//! plus the horizontal bounds check available for culling.

use hecs::{Entity, World};

use gallery_core::constants::OOB_MARGIN;
use gallery_core::types::{Point, ViewBounds};

/// Despawn every queued entity.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// True if `position` is past `max_x + 200` or short of `min_x + 200`.
///
/// Both sides add the margin, so this is also true for a target sitting
/// just inside the left edge. Traversal completion removes targets; the
/// engine does not cull with this.
pub fn is_out_of_bounds(position: Point, bounds: &ViewBounds) -> bool {
    position.x > bounds.max_x() + OOB_MARGIN || position.x < bounds.min_x() + OOB_MARGIN
}
