//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the round: reset state, lay out the HUD, start both timers.
    StartRound,
    /// A touch or click in scene coordinates. Only the first point is used.
    Touch { points: Vec<Point> },
}

impl PlayerCommand {
    /// Single-point touch.
    pub fn tap(point: Point) -> Self {
        PlayerCommand::Touch {
            points: vec![point],
        }
    }
}
