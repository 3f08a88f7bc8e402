//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use gallery_core::components::{Effect, FadeOut, Target};
use gallery_core::constants::TARGET_BASE_SIZE;
use gallery_core::enums::GamePhase;
use gallery_core::events::SceneEvent;
use gallery_core::state::*;
use gallery_core::types::{Point, SimTime};

use crate::hud::Hud;
use crate::round::RoundState;
use crate::systems::effects::fade_alpha;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    round: &RoundState,
    hud: &Hud,
    events: Vec<SceneEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        round: RoundView {
            score: round.score,
            ammo: round.ammo,
            time_remaining: round.time_remaining,
            active: phase == GamePhase::Active && round.is_active(),
        },
        targets: build_targets(world),
        effects: build_effects(world),
        labels: hud.views(),
        events,
    }
}

/// Build TargetView list, bottom-most first.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Point, Option<&FadeOut>)>()
        .iter()
        .map(|(_, (target, pos, fade))| {
            let scale = target.size_class.scale();
            TargetView {
                target_id: target.target_id,
                glyph: target.glyph.to_string(),
                category: target.category,
                size_class: target.size_class,
                lane: target.lane,
                position: *pos,
                scale,
                font_size: TARGET_BASE_SIZE * scale,
                alpha: fade.map_or(1.0, fade_alpha),
            }
        })
        .collect();

    targets.sort_by_key(|t| t.target_id);
    targets
}

/// Build EffectView list.
fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<(&Effect, &Point)>()
        .iter()
        .map(|(_, (effect, pos))| EffectView {
            kind: effect.kind,
            position: *pos,
            remaining_secs: effect.remaining_secs,
        })
        .collect()
}
