//! Point queries against live targets.

use hecs::{Entity, World};

use gallery_core::components::Target;
use gallery_core::constants::TARGET_BASE_SIZE;
use gallery_core::enums::SizeClass;
use gallery_core::types::{HitBox, Point};

/// Square hit box matching the target's drawn size.
pub fn target_hit_box(position: Point, size_class: SizeClass) -> HitBox {
    HitBox::square(position, TARGET_BASE_SIZE * size_class.scale())
}

/// The topmost (highest id) target under `point`. A target that is fading
/// out stays live until removal, so it still shields whatever is below it.
pub fn topmost_target_at(world: &World, point: Point) -> Option<Entity> {
    world
        .query::<(&Target, &Point)>()
        .iter()
        .filter(|(_, (target, pos))| target_hit_box(**pos, target.size_class).contains(point))
        .max_by_key(|(_, (target, _))| target.target_id)
        .map(|(entity, _)| entity)
}
