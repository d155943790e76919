//! Body registry kept in lock-step with the physics world
//!
//! The registry owns the [`PhysicsWorld`], so every insertion and removal
//! touches both sides in the same call. Outside those calls the registry
//! and the world always hold the same set of bodies.

use crate::body::{Body, BodySpec, BodyView};
use sandbox_math::Vec2;
use sandbox_physics::{BodyDesc, ColliderShape, FixtureKey, PhysicsConfig, PhysicsWorld};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key to a body in the registry
    ///
    /// Identity is by key, never by value: two bodies with identical fields
    /// are still distinct entries.
    pub struct BodyId;
}

/// Ordered collection of active bodies
pub struct BodyRegistry {
    /// Body records (using generational keys)
    bodies: SlotMap<BodyId, Body>,
    /// Insertion order, used for export and iteration
    order: Vec<BodyId>,
    physics: PhysicsWorld,
}

impl BodyRegistry {
    /// Create an empty registry with its own physics world
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            order: Vec::new(),
            physics: PhysicsWorld::with_config(config),
        }
    }

    /// Append a body and insert it into the physics world
    pub fn add(&mut self, spec: BodySpec) -> BodyId {
        let collider = spec.kind.collider(spec.size);
        let mass = match spec.mass {
            Some(mass) if mass.is_finite() => mass,
            _ => self.physics.config.default_mass(&collider),
        };

        let desc = BodyDesc::new(collider, spec.position)
            .with_velocity(spec.velocity)
            .with_mass(mass)
            .with_static(spec.is_static);
        let physics_body = self.physics.add_body(&desc);

        let id = self.bodies.insert(Body {
            kind: spec.kind,
            size: spec.size,
            mass,
            is_static: spec.is_static,
            fill: spec.fill,
            physics_body,
        });
        self.order.push(id);
        id
    }

    /// Remove a body from the registry and the physics world
    ///
    /// Returns `false` (and does nothing) if the body is not present.
    pub fn remove(&mut self, id: BodyId) -> bool {
        let Some(body) = self.bodies.remove(id) else {
            return false;
        };
        if let Some(index) = self.order.iter().position(|&other| other == id) {
            self.order.remove(index);
        }
        self.physics.remove_body(body.physics_body);
        true
    }

    /// Remove every body
    pub fn clear(&mut self) {
        for id in self.ids() {
            self.remove(id);
        }
    }

    /// Look up a body with its current engine state
    pub fn get(&self, id: BodyId) -> Option<BodyView<'_>> {
        let body = self.bodies.get(id)?;
        let state = self.physics.body_state(body.physics_body)?;
        Some(BodyView { id, body, state })
    }

    /// Check if a body is present
    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(id)
    }

    /// Number of bodies
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot of body ids in registry order
    pub fn ids(&self) -> Vec<BodyId> {
        self.order.clone()
    }

    /// Iterate over bodies in registry order with live engine state
    pub fn iter(&self) -> impl Iterator<Item = BodyView<'_>> + '_ {
        self.order.iter().filter_map(move |&id| self.get(id))
    }

    /// Whether any body sits at exactly this position
    pub fn position_occupied(&self, position: Vec2) -> bool {
        self.iter().any(|view| view.position().exactly_equals(position))
    }

    /// Read-only access to the physics world
    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    /// Advance the physics world
    pub fn step(&mut self, dt: f32) {
        self.physics.step(dt);
    }

    /// Add a fixed piece of scenery that is not a registry body
    pub fn add_fixture(&mut self, shape: ColliderShape, position: Vec2) -> FixtureKey {
        self.physics.add_fixture(shape, position)
    }

    /// Move a fixture
    pub fn set_fixture_position(&mut self, key: FixtureKey, position: Vec2) -> bool {
        self.physics.set_fixture_position(key, position)
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FillStyle, ShapeKind};

    fn circle_at(x: f32, y: f32) -> BodySpec {
        BodySpec::new(ShapeKind::Circle, 20.0, Vec2::new(x, y))
    }

    fn assert_lock_step(registry: &BodyRegistry) {
        assert_eq!(registry.len(), registry.physics().body_count());
        for view in registry.iter() {
            assert!(registry.physics().contains(view.body.physics_body()));
        }
    }

    #[test]
    fn test_add_keeps_lock_step() {
        let mut registry = BodyRegistry::default();
        registry.add(circle_at(10.0, 10.0));
        registry.add(circle_at(20.0, 10.0));
        assert_eq!(registry.len(), 2);
        assert_lock_step(&registry);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = BodyRegistry::default();
        let id = registry.add(circle_at(10.0, 10.0));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
        assert_lock_step(&registry);
    }

    #[test]
    fn test_identical_bodies_are_distinct() {
        let mut registry = BodyRegistry::default();
        let a = registry.add(circle_at(10.0, 10.0));
        let b = registry.add(circle_at(10.0, 10.0));
        assert_ne!(a, b);
        registry.remove(a);
        assert!(registry.contains(b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_order_preserved_after_removal() {
        let mut registry = BodyRegistry::default();
        let a = registry.add(circle_at(1.0, 1.0));
        let b = registry.add(circle_at(2.0, 2.0));
        let c = registry.add(circle_at(3.0, 3.0));
        registry.remove(b);
        assert_eq!(registry.ids(), vec![a, c]);
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut registry = BodyRegistry::default();
        for i in 0..5 {
            registry.add(circle_at(i as f32, 0.0));
        }
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.physics().body_count(), 0);
    }

    #[test]
    fn test_default_mass_uses_area() {
        let mut registry = BodyRegistry::default();
        let id = registry.add(BodySpec::new(ShapeKind::Rectangle, 50.0, Vec2::ZERO));
        let view = registry.get(id).unwrap();
        assert!((view.body.mass - 2.5).abs() < 0.0001);
    }

    #[test]
    fn test_explicit_mass_kept() {
        let mut registry = BodyRegistry::default();
        let id = registry.add(circle_at(0.0, 0.0).with_mass(7.5));
        assert_eq!(registry.get(id).unwrap().body.mass, 7.5);
    }

    #[test]
    fn test_position_occupied_is_exact() {
        let mut registry = BodyRegistry::default();
        registry.add(circle_at(100.0, 200.0));
        assert!(registry.position_occupied(Vec2::new(100.0, 200.0)));
        assert!(!registry.position_occupied(Vec2::new(100.0, 200.001)));
    }

    #[test]
    fn test_fixture_does_not_count() {
        let mut registry = BodyRegistry::default();
        registry.add_fixture(ShapeKind::Rectangle.collider(10.0), Vec2::ZERO);
        assert!(registry.is_empty());
        assert_lock_step(&registry);
    }

    #[test]
    fn test_fill_and_static_recorded() {
        let mut registry = BodyRegistry::default();
        let id = registry.add(
            circle_at(0.0, 0.0)
                .with_static(true)
                .with_fill(FillStyle::static_fill()),
        );
        let view = registry.get(id).unwrap();
        assert!(view.body.is_static);
        assert!(view.state.is_static);
        assert_eq!(view.body.fill.as_str(), "red");
    }
}
