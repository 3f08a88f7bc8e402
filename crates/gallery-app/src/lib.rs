//! Shooting gallery host.
//!
//! Runs the headless round controller on a real-time game-loop thread and
//! exposes the command channel and latest snapshot a renderer needs. Also
//! ships the scripted shooter used by the `gallery` binary.

pub mod autoplay;
pub mod game_loop;
pub mod state;

pub use gallery_core as core;
