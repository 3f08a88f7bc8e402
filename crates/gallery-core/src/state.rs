//! Game state snapshot: the complete visible state sent to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SceneEvent;
use crate::types::{Color, Point, SimTime};

/// Complete game state broadcast to the renderer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub round: RoundView,
    /// Live targets, bottom-most first.
    pub targets: Vec<TargetView>,
    pub effects: Vec<EffectView>,
    pub labels: Vec<LabelView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<SceneEvent>,
}

/// Score, ammo and countdown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundView {
    pub score: i32,
    pub ammo: u32,
    pub time_remaining: u32,
    pub active: bool,
}

/// A live target as the renderer should draw it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub target_id: u32,
    pub glyph: String,
    pub category: Category,
    pub size_class: SizeClass,
    pub lane: Lane,
    pub position: Point,
    pub scale: f32,
    pub font_size: f32,
    /// 1.0 = opaque; drops to 0.0 while fading out.
    pub alpha: f32,
}

/// A running particle effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Point,
    pub remaining_secs: f64,
}

/// A HUD label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelView {
    pub label: HudLabel,
    pub text: String,
    pub position: Point,
    pub font_size: f32,
    pub color: Color,
}
