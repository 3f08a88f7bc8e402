//! Simulation engine for the shooting gallery.
//!
//! Owns the hecs ECS world of live targets and effects, runs the round
//! timers on a fixed-tick logical clock, and produces GameStateSnapshots
//! for whatever renderer sits on top.

pub mod engine;
pub mod hud;
pub mod round;
pub mod sampling;
pub mod schedule;
pub mod systems;

pub use engine::{RoundController, SimConfig};
pub use gallery_core as core;
