//! Body descriptions and state snapshots for the physics adapter

use crate::shapes::ColliderShape;
use sandbox_math::Vec2;
use slotmap::new_key_type;

// Define generational key types for bodies and fixtures
new_key_type! {
    /// Key to a dynamic or static body in the physics world
    ///
    /// Uses generational indexing so a key to a removed body never aliases
    /// a body inserted later into the same slot.
    pub struct BodyKey;

    /// Key to a fixture (scenery such as the ground)
    ///
    /// Fixtures are tracked apart from bodies and never counted with them.
    pub struct FixtureKey;
}

/// Everything needed to insert a body into the physics world
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDesc {
    /// Centre position in pixels
    pub position: Vec2,
    /// Initial linear velocity in pixels per second
    pub velocity: Vec2,
    /// Collision shape
    pub shape: ColliderShape,
    /// Total mass handed to the engine
    pub mass: f32,
    /// Static bodies never move
    pub is_static: bool,
}

impl BodyDesc {
    /// Create a dynamic body at rest with mass left at zero
    ///
    /// A non-positive mass makes the world fall back to area times density.
    pub fn new(shape: ColliderShape, position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            shape,
            mass: 0.0,
            is_static: false,
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the mass
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Set whether this body is static
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }
}

/// Snapshot of a body as the engine currently sees it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Rotation in radians
    pub angle: f32,
    pub is_static: bool,
}
