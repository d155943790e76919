//! Surface properties applied to every collider

use serde::{Deserialize, Serialize};

/// Contact material for colliders
///
/// Every body and fixture in the sandbox shares one material taken from
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: f32,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            friction: 0.1,
            restitution: 0.0,
        }
    }
}

impl PhysicsMaterial {
    /// Create a new material
    ///
    /// Friction is clamped to be non-negative, restitution to [0.0, 1.0].
    pub fn new(friction: f32, restitution: f32) -> Self {
        Self {
            friction: friction.max(0.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }
}
