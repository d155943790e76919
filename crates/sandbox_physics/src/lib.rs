//! Physics adapter for the shape sandbox
//!
//! This crate wraps `rapier2d` behind a small keyed API:
//! - Collision shape descriptions (ball, box, triangle)
//! - Body insertion/removal with generational keys
//! - Fixtures (static scenery) tracked apart from bodies
//! - Fixed-timestep stepping with screen-space gravity

pub mod body;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyDesc, BodyKey, BodyState, FixtureKey};
pub use material::PhysicsMaterial;
pub use shapes::ColliderShape;
pub use world::{PhysicsConfig, PhysicsWorld};
