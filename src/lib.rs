//! Shape Sandbox - application shell
//!
//! Configuration, input mapping and the per-frame systems used by the
//! `shape_sandbox` binary.

pub mod config;
pub mod input;
pub mod systems;
