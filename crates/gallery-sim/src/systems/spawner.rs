//! Target spawn factory.
//!
//! Rolls a target's attributes, derives its lane endpoints from the view
//! bounds, and spawns it with a traversal already running.

use glam::Vec2;
use hecs::World;
use rand::Rng;

use gallery_core::components::{Target, Traversal};
use gallery_core::config::RoundConfig;
use gallery_core::constants::{LANE_ENTRY_MARGIN, LANE_EXIT_MARGIN};
use gallery_core::enums::{Category, Lane, SizeClass};
use gallery_core::events::SceneEvent;
use gallery_core::types::{Point, ViewBounds};

use crate::sampling;

/// Randomized attributes of a target about to spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTraits {
    pub lane: Lane,
    pub size_class: SizeClass,
    pub category: Category,
    pub glyph: &'static str,
    pub traversal_secs: f64,
}

/// Roll every attribute independently. The draw order is fixed.
pub fn roll_traits<R: Rng + ?Sized>(rng: &mut R, config: &RoundConfig) -> TargetTraits {
    let lane = sampling::sample_lane(rng);
    let size_class = sampling::sample_size_class(rng);
    let category = sampling::sample_category(rng, config.friendly_odds);
    let glyph = sampling::sample_glyph(rng, category);
    let traversal_secs =
        sampling::uniform_duration(rng, config.traversal_min_secs, config.traversal_max_secs);

    TargetTraits {
        lane,
        size_class,
        category,
        glyph,
        traversal_secs,
    }
}

/// Start and end of a lane: the middle lane runs right-to-left, the
/// others left-to-right, each entering just off-screen.
pub fn lane_endpoints(lane: Lane, bounds: &ViewBounds) -> (Point, Point) {
    let y = lane.y_offset();
    if lane.runs_leftward() {
        (
            Vec2::new(bounds.max_x() + LANE_ENTRY_MARGIN, y),
            Vec2::new(bounds.min_x() - LANE_EXIT_MARGIN, y),
        )
    } else {
        (
            Vec2::new(bounds.min_x() - LANE_ENTRY_MARGIN, y),
            Vec2::new(bounds.max_x() + LANE_EXIT_MARGIN, y),
        )
    }
}

/// Spawn a target at the start of its lane, traversing to the far end.
pub fn spawn_target(
    world: &mut World,
    target_id: u32,
    traits: TargetTraits,
    bounds: &ViewBounds,
    events: &mut Vec<SceneEvent>,
) -> hecs::Entity {
    let (from, to) = lane_endpoints(traits.lane, bounds);
    spawn_target_between(world, target_id, traits, from, to, events)
}

/// Spawn a target with explicit traversal endpoints.
pub fn spawn_target_between(
    world: &mut World,
    target_id: u32,
    traits: TargetTraits,
    from: Point,
    to: Point,
    events: &mut Vec<SceneEvent>,
) -> hecs::Entity {
    let target = Target {
        target_id,
        category: traits.category,
        size_class: traits.size_class,
        lane: traits.lane,
        glyph: traits.glyph,
    };
    let traversal = Traversal {
        from,
        to,
        duration_secs: traits.traversal_secs,
        elapsed_secs: 0.0,
    };

    events.push(SceneEvent::TargetSpawned {
        target_id,
        glyph: traits.glyph.to_string(),
        category: traits.category,
        size_class: traits.size_class,
        lane: traits.lane,
        from,
        to,
        duration_secs: traits.traversal_secs,
    });

    world.spawn((target, from, traversal))
}
