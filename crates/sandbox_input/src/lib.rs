//! Sandbox Input Handling
//!
//! This crate turns mouse and keyboard events into body spawns and
//! spawn-control edits.

mod spawn_controller;

pub use spawn_controller::{SpawnController, SpawnTarget, MIN_SIZE};
