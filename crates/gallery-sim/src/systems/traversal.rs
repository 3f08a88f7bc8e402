//! Traversal system: linear interpolation along each target's lane.
//!
//! A target whose traversal completes is queued for removal.

use hecs::{Entity, World};

use gallery_core::components::{Target, Traversal};
use gallery_core::enums::RemovalReason;
use gallery_core::events::SceneEvent;
use gallery_core::types::Point;

/// Advance every traversal by `dt` seconds.
pub fn run(
    world: &mut World,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SceneEvent>,
) {
    for (entity, (pos, traversal, target)) in
        world.query_mut::<(&mut Point, &mut Traversal, &Target)>()
    {
        traversal.elapsed_secs += dt;
        let t = if traversal.duration_secs > 0.0 {
            (traversal.elapsed_secs / traversal.duration_secs).min(1.0)
        } else {
            1.0
        };
        *pos = traversal.from.lerp(traversal.to, t as f32);

        if t >= 1.0 {
            despawn_buffer.push(entity);
            events.push(SceneEvent::TargetRemoved {
                target_id: target.target_id,
                reason: RemovalReason::TraversalComplete,
            });
        }
    }
}
