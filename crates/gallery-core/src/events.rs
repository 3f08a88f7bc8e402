//! One-shot events emitted by the simulation for the renderer.
//!
//! Continuous state (positions, label colors) travels in the snapshot;
//! events cover the moments a renderer would start an action.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Color, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// Round state initialized and timers started.
    RoundStarted { round_secs: u32, ammo: u32 },
    /// A target was added and begins its traversal.
    TargetSpawned {
        target_id: u32,
        glyph: String,
        category: Category,
        size_class: SizeClass,
        lane: Lane,
        from: Point,
        to: Point,
        duration_secs: f64,
    },
    /// A hit hostile target starts fading out.
    TargetFadeStarted { target_id: u32, duration_secs: f64 },
    /// A target left the scene.
    TargetRemoved {
        target_id: u32,
        reason: RemovalReason,
    },
    /// A particle emitter was placed.
    EffectSpawned {
        kind: EffectKind,
        position: Point,
        lifetime_secs: f64,
    },
    /// A particle emitter reached the end of its lifetime.
    EffectExpired { kind: EffectKind },
    /// A label's text changed (or the label was created).
    LabelText { label: HudLabel, text: String },
    /// A label started a color transition.
    LabelRecolor {
        label: HudLabel,
        color: Color,
        duration_secs: f64,
    },
    /// The score label started its friendly-hit flash.
    ScoreFlash { repeats: usize },
    /// A repeating timer was cancelled.
    TimerCancelled { timer: TimerKind },
    /// The countdown reached zero.
    GameOver { final_score: i32 },
}
