//! Body records and fill styles
//!
//! A [`BodySpec`] describes a body before it is added; a [`Body`] is what
//! the registry keeps afterwards. Position, velocity and angle are owned by
//! the physics engine and read through [`BodyView`].

use crate::shape_kind::ShapeKind;
use sandbox_math::Vec2;
use sandbox_physics::{BodyKey, BodyState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display colour stored as the string the user or a document gave
///
/// Kept verbatim so an import preserves whatever the exporting side used.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillStyle(pub String);

impl FillStyle {
    /// Fill for bodies spawned in static mode
    pub fn static_fill() -> Self {
        Self("red".to_string())
    }

    /// Fill for bodies spawned in any other mode
    pub fn dynamic_fill() -> Self {
        Self("blue".to_string())
    }

    /// Spawn fill for a static or dynamic body
    pub fn for_mode(is_static: bool) -> Self {
        if is_static {
            Self::static_fill()
        } else {
            Self::dynamic_fill()
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FillStyle {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything needed to add a body to the registry
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpec {
    pub kind: ShapeKind,
    /// Diameter, side length, or twice the circumradius depending on kind
    pub size: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Explicit mass; `None` lets the engine default (area times density) apply
    pub mass: Option<f32>,
    pub is_static: bool,
    pub fill: FillStyle,
}

impl BodySpec {
    /// A dynamic, blue body at rest with the default mass
    pub fn new(kind: ShapeKind, size: f32, position: Vec2) -> Self {
        Self {
            kind,
            size,
            position,
            velocity: Vec2::ZERO,
            mass: None,
            is_static: false,
            fill: FillStyle::dynamic_fill(),
        }
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Override the mass
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Set whether the body is static (does not change the fill)
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Set the fill style
    pub fn with_fill(mut self, fill: impl Into<FillStyle>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// A body tracked by the registry
#[derive(Clone, Debug)]
pub struct Body {
    pub kind: ShapeKind,
    pub size: f32,
    /// Mass as it will be exported (explicit or engine default)
    pub mass: f32,
    pub is_static: bool,
    pub fill: FillStyle,
    /// Handle into the physics world
    pub(crate) physics_body: BodyKey,
}

impl Body {
    /// Key of this body's counterpart in the physics world
    pub fn physics_body(&self) -> BodyKey {
        self.physics_body
    }
}

/// A body joined with the engine's current state for it
#[derive(Clone, Copy, Debug)]
pub struct BodyView<'a> {
    pub id: crate::BodyId,
    pub body: &'a Body,
    pub state: BodyState,
}

impl BodyView<'_> {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.state.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_for_mode() {
        assert_eq!(FillStyle::for_mode(true).as_str(), "red");
        assert_eq!(FillStyle::for_mode(false).as_str(), "blue");
    }

    #[test]
    fn test_fill_serializes_as_plain_string() {
        let json = serde_json::to_string(&FillStyle::from("#00ff00")).unwrap();
        assert_eq!(json, "\"#00ff00\"");
    }

    #[test]
    fn test_body_spec_defaults() {
        let spec = BodySpec::new(ShapeKind::Circle, 40.0, Vec2::new(100.0, 100.0));
        assert_eq!(spec.velocity, Vec2::ZERO);
        assert_eq!(spec.mass, None);
        assert!(!spec.is_static);
        assert_eq!(spec.fill, FillStyle::dynamic_fill());
    }

    #[test]
    fn test_body_spec_builder() {
        let spec = BodySpec::new(ShapeKind::Triangle, 30.0, Vec2::ZERO)
            .with_velocity(Vec2::new(1.0, 2.0))
            .with_mass(4.0)
            .with_static(true)
            .with_fill("green");
        assert_eq!(spec.velocity, Vec2::new(1.0, 2.0));
        assert_eq!(spec.mass, Some(4.0));
        assert!(spec.is_static);
        assert_eq!(spec.fill.as_str(), "green");
    }
}
