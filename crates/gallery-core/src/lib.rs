//! Core types and definitions for the shooting gallery.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, state snapshots, scene events, configuration
//! and constants. It has no dependency on any renderer or runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
