//! Core types for the shape sandbox
//!
//! This crate provides the bookkeeping around the physics world:
//!
//! - [`ShapeKind`] - Circle, rectangle or triangle, with the shared size mapping
//! - [`BodySpec`] / [`Body`] - A body before and after it is added
//! - [`BodyRegistry`] - Ordered bodies kept in lock-step with the physics world
//! - [`SimulationHost`] - Registry, ground and viewport; step + cull per frame
//! - [`SpawnControls`] - Raw control values turned into [`SpawnRequest`]s
//! - [`serializer`] - JSON export/import with exact-position dedup
//! - [`ImportLoader`] - Background reader for import files

mod body;
mod error;
mod host;
mod import_loader;
mod registry;
mod shape_kind;
mod spawn;
mod viewport;
pub mod serializer;

pub use body::{Body, BodySpec, BodyView, FillStyle};
pub use error::SerializeError;
pub use host::{HostConfig, SimulationHost, StepReport, DEFAULT_TIMESTEP};
pub use import_loader::{ImportFile, ImportLoader};
pub use registry::{BodyId, BodyRegistry};
pub use serializer::{BodyDocument, BodyRecord, ImportReport};
pub use shape_kind::ShapeKind;
pub use spawn::{SpawnControls, SpawnRequest, DYNAMIC_MODE, STATIC_MODE};
pub use viewport::Viewport;

// Re-export math and physics types for convenient access through sandbox_core
pub use sandbox_math::Vec2;
pub use sandbox_physics::{PhysicsConfig, PhysicsMaterial};
