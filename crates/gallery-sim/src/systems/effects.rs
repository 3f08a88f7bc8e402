//! Hit feedback: particle effects and the hostile fade-out.

use hecs::{Entity, World};

use gallery_core::components::{Effect, FadeOut, Target};
use gallery_core::constants::{EFFECT_LIFETIME_SECS, FADE_OUT_SECS};
use gallery_core::enums::{EffectKind, RemovalReason};
use gallery_core::events::SceneEvent;
use gallery_core::types::Point;

/// Place a particle emitter that removes itself after its lifetime.
pub fn spawn_effect(
    world: &mut World,
    kind: EffectKind,
    position: Point,
    events: &mut Vec<SceneEvent>,
) -> Entity {
    events.push(SceneEvent::EffectSpawned {
        kind,
        position,
        lifetime_secs: EFFECT_LIFETIME_SECS,
    });
    world.spawn((
        Effect {
            kind,
            remaining_secs: EFFECT_LIFETIME_SECS,
        },
        position,
    ))
}

/// Start fading a target out. Returns false if the entity is gone or
/// already fading.
pub fn start_fade(world: &mut World, entity: Entity, events: &mut Vec<SceneEvent>) -> bool {
    let target_id = match world.get::<&Target>(entity) {
        Ok(target) => target.target_id,
        Err(_) => return false,
    };
    if world.get::<&FadeOut>(entity).is_ok() {
        return false;
    }

    let fade = FadeOut {
        duration_secs: FADE_OUT_SECS,
        elapsed_secs: 0.0,
    };
    if world.insert_one(entity, fade).is_err() {
        return false;
    }
    events.push(SceneEvent::TargetFadeStarted {
        target_id,
        duration_secs: FADE_OUT_SECS,
    });
    true
}

/// Advance fades and effect lifetimes, queueing finished entities.
/// Entities already queued this tick are not queued twice.
pub fn run(
    world: &mut World,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SceneEvent>,
) {
    for (entity, (fade, target)) in world.query_mut::<(&mut FadeOut, &Target)>() {
        fade.elapsed_secs += dt;
        if fade.elapsed_secs + 1e-9 >= fade.duration_secs && !despawn_buffer.contains(&entity) {
            despawn_buffer.push(entity);
            events.push(SceneEvent::TargetRemoved {
                target_id: target.target_id,
                reason: RemovalReason::FadedOut,
            });
        }
    }

    for (entity, effect) in world.query_mut::<&mut Effect>() {
        effect.remaining_secs -= dt;
        if effect.remaining_secs <= 1e-9 {
            despawn_buffer.push(entity);
            events.push(SceneEvent::EffectExpired { kind: effect.kind });
        }
    }
}

/// Opacity of a fading target.
pub fn fade_alpha(fade: &FadeOut) -> f32 {
    if fade.duration_secs <= 0.0 {
        return 0.0;
    }
    (1.0 - fade.elapsed_secs / fade.duration_secs).clamp(0.0, 1.0) as f32
}
