//! Physics world backed by rapier2d

use crate::body::{BodyDesc, BodyKey, BodyState, FixtureKey};
use crate::material::PhysicsMaterial;
use crate::shapes::ColliderShape;
use rapier2d::prelude::*;
use sandbox_math::Vec2;
use slotmap::SlotMap;

/// Configuration for the physics simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity acceleration along +Y (screen space, positive = down)
    pub gravity: f32,
    /// Mass per square pixel used when a body has no explicit mass
    pub density: f32,
    /// Material applied to every collider
    pub material: PhysicsMaterial,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            density: 0.001,
            material: PhysicsMaterial::default(),
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity,
            ..Default::default()
        }
    }

    /// Mass the engine assigns a shape when none is given
    pub fn default_mass(&self, shape: &ColliderShape) -> f32 {
        shape.area() * self.density
    }
}

/// The physics world containing all bodies and fixtures
///
/// Bodies and fixtures are both rapier rigid bodies underneath; they are
/// keyed through separate slot maps so fixtures never show up in
/// [`PhysicsWorld::body_count`].
pub struct PhysicsWorld {
    rigid_bodies: RigidBodySet,
    colliders: ColliderSet,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    integration_parameters: IntegrationParameters,
    /// Dynamic and static bodies (using generational keys)
    bodies: SlotMap<BodyKey, RigidBodyHandle>,
    /// Scenery such as the ground
    fixtures: SlotMap<FixtureKey, RigidBodyHandle>,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            rigid_bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            integration_parameters: IntegrationParameters::default(),
            bodies: SlotMap::with_key(),
            fixtures: SlotMap::with_key(),
            config,
        }
    }

    /// Insert a rigid body with one attached collider
    fn insert(&mut self, desc: &BodyDesc) -> RigidBodyHandle {
        let builder = if desc.is_static {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic().linvel(vector![desc.velocity.x, desc.velocity.y])
        };
        let rigid_body = builder
            .translation(vector![desc.position.x, desc.position.y])
            .build();
        let handle = self.rigid_bodies.insert(rigid_body);

        let mass = if desc.mass.is_finite() && desc.mass > 0.0 {
            desc.mass
        } else {
            self.config.default_mass(&desc.shape)
        };
        let collider = desc
            .shape
            .to_builder()
            .mass(mass)
            .friction(self.config.material.friction)
            .restitution(self.config.material.restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.rigid_bodies);
        handle
    }

    /// Remove a rigid body and its colliders from the engine
    fn delete(&mut self, handle: RigidBodyHandle) {
        self.rigid_bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, desc: &BodyDesc) -> BodyKey {
        let handle = self.insert(desc);
        self.bodies.insert(handle)
    }

    /// Remove a body (and its colliders) from the world
    ///
    /// Returns `false` if the key was stale or never issued.
    pub fn remove_body(&mut self, key: BodyKey) -> bool {
        match self.bodies.remove(key) {
            Some(handle) => {
                self.delete(handle);
                true
            }
            None => false,
        }
    }

    /// Check whether a key refers to a live body
    pub fn contains(&self, key: BodyKey) -> bool {
        self.bodies.contains_key(key)
    }

    /// Read the engine's current state for a body
    pub fn body_state(&self, key: BodyKey) -> Option<BodyState> {
        let handle = *self.bodies.get(key)?;
        let rigid_body = self.rigid_bodies.get(handle)?;
        let translation = rigid_body.translation();
        let linvel = rigid_body.linvel();
        Some(BodyState {
            position: Vec2::new(translation.x, translation.y),
            velocity: Vec2::new(linvel.x, linvel.y),
            angle: rigid_body.rotation().angle(),
            is_static: rigid_body.is_fixed(),
        })
    }

    /// Get the number of bodies in the world (fixtures excluded)
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Add a fixed piece of scenery
    pub fn add_fixture(&mut self, shape: ColliderShape, position: Vec2) -> FixtureKey {
        let desc = BodyDesc::new(shape, position).with_static(true);
        let handle = self.insert(&desc);
        self.fixtures.insert(handle)
    }

    /// Move a fixture without recreating it
    ///
    /// Returns `false` if the key is stale.
    pub fn set_fixture_position(&mut self, key: FixtureKey, position: Vec2) -> bool {
        let Some(&handle) = self.fixtures.get(key) else {
            return false;
        };
        match self.rigid_bodies.get_mut(handle) {
            Some(rigid_body) => {
                rigid_body.set_translation(vector![position.x, position.y], true);
                true
            }
            None => false,
        }
    }

    /// Current position of a fixture
    pub fn fixture_position(&self, key: FixtureKey) -> Option<Vec2> {
        let handle = *self.fixtures.get(key)?;
        let translation = self.rigid_bodies.get(handle)?.translation();
        Some(Vec2::new(translation.x, translation.y))
    }

    /// Get the number of fixtures in the world
    pub fn fixture_count(&self) -> usize {
        self.fixtures.len()
    }

    /// Step the physics simulation forward by dt seconds
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        let gravity = vector![0.0, self.config.gravity];
        self.pipeline.step(
            &gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
