//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Whether shooting a target scores or costs points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Hostile,
    Friendly,
}

/// Target size class. Smaller targets are worth more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Mini,
    #[default]
    Normal,
    Big,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Mini, SizeClass::Normal, SizeClass::Big];

    /// Points awarded for hitting a hostile target of this size.
    pub fn score_multiplier(self) -> i32 {
        match self {
            SizeClass::Mini => 3,
            SizeClass::Normal => 2,
            SizeClass::Big => 1,
        }
    }

    /// Visual scale relative to the base target size.
    pub fn scale(self) -> f32 {
        match self {
            SizeClass::Mini => 0.6,
            SizeClass::Normal => 1.0,
            SizeClass::Big => 1.2,
        }
    }
}

/// Horizontal lane a target travels along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Middle, Lane::Bottom];

    /// Fixed vertical offset of the lane.
    pub fn y_offset(self) -> f32 {
        match self {
            Lane::Top => -200.0,
            Lane::Middle => 0.0,
            Lane::Bottom => 200.0,
        }
    }

    /// The middle lane runs right-to-left, the others left-to-right.
    pub fn runs_leftward(self) -> bool {
        self == Lane::Middle
    }
}

/// Round lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine created, round not started.
    #[default]
    Ready,
    /// Countdown running; taps are accepted.
    Active,
    /// Countdown reached zero. Terminal.
    GameOver,
}

/// Particle effect played at a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Hostile target destroyed.
    Explosion,
    /// Friendly target shot.
    FriendlyHit,
}

/// HUD labels rendered on top of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HudLabel {
    Score,
    Reload,
    Countdown,
    Ammo,
    FriendlyLegend,
    GameOver,
}

/// Why a target left the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Reached the end of its traversal.
    TraversalComplete,
    /// Finished fading out after a hostile hit.
    FadedOut,
}

/// The two repeating round timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerKind {
    Spawn,
    Countdown,
}
