//! Simulation host
//!
//! The host owns the registry (and through it the physics world), the
//! ground fixture and the viewport. One call to [`SimulationHost::step`]
//! is one frame: a fixed physics step followed by an out-of-bounds cull.

use crate::body::BodySpec;
use crate::registry::{BodyId, BodyRegistry};
use crate::spawn::SpawnRequest;
use crate::viewport::{Viewport, GROUND_HEIGHT, GROUND_WIDTH};
use sandbox_math::Vec2;
use sandbox_physics::{ColliderShape, FixtureKey, PhysicsConfig};

/// Default fixed timestep (60 Hz)
pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;

/// Settings for constructing a host
#[derive(Clone, Debug)]
pub struct HostConfig {
    pub physics: PhysicsConfig,
    pub viewport: Viewport,
    /// Seconds advanced per step
    pub timestep: f32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            viewport: Viewport::default(),
            timestep: DEFAULT_TIMESTEP,
        }
    }
}

/// What happened during one step
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Bodies removed for leaving the viewport, in registry order
    pub culled: Vec<BodyId>,
}

/// The single simulation instance
pub struct SimulationHost {
    registry: BodyRegistry,
    viewport: Viewport,
    ground: FixtureKey,
    timestep: f32,
}

impl SimulationHost {
    /// Create a host with an empty registry and the ground in place
    pub fn new(config: HostConfig) -> Self {
        let mut registry = BodyRegistry::new(config.physics);
        let ground = registry.add_fixture(
            ColliderShape::cuboid(GROUND_WIDTH / 2.0, GROUND_HEIGHT / 2.0),
            config.viewport.ground_position(),
        );
        log::debug!(
            "Simulation host created: {}x{} viewport, dt = {}",
            config.viewport.width,
            config.viewport.height,
            config.timestep
        );
        Self {
            registry,
            viewport: config.viewport,
            ground,
            timestep: config.timestep,
        }
    }

    /// Advance physics by one fixed timestep, then cull
    pub fn step(&mut self) -> StepReport {
        self.registry.step(self.timestep);
        let culled = self.cull();
        if !culled.is_empty() {
            log::debug!("Culled {} out-of-bounds bodies", culled.len());
        }
        StepReport { culled }
    }

    /// Remove every body outside the viewport
    ///
    /// Positions are checked over an id snapshot taken before any removal,
    /// so removing one body never causes another to be skipped.
    fn cull(&mut self) -> Vec<BodyId> {
        let out_of_bounds: Vec<BodyId> = self
            .registry
            .ids()
            .into_iter()
            .filter(|&id| {
                self.registry
                    .get(id)
                    .is_some_and(|view| self.viewport.is_out_of_bounds(view.position()))
            })
            .collect();

        for &id in &out_of_bounds {
            self.registry.remove(id);
        }
        out_of_bounds
    }

    /// Track a new window size and move the ground under it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        let ground_position = self.viewport.ground_position();
        if !self.registry.set_fixture_position(self.ground, ground_position) {
            log::warn!("Ground fixture missing on resize");
        }
    }

    /// Spawn a body described by `request` at `position`
    pub fn spawn(&mut self, request: &SpawnRequest, position: Vec2) -> BodyId {
        self.add(request.to_spec(position))
    }

    /// Add an arbitrary body
    pub fn add(&mut self, spec: BodySpec) -> BodyId {
        self.registry.add(spec)
    }

    /// Remove every body (the ground stays)
    pub fn clear(&mut self) {
        let count = self.registry.len();
        self.registry.clear();
        log::info!("Cleared {} bodies", count);
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut BodyRegistry {
        &mut self.registry
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current ground centre
    pub fn ground_position(&self) -> Vec2 {
        self.registry
            .physics()
            .fixture_position(self.ground)
            .unwrap_or_else(|| self.viewport.ground_position())
    }

    /// Seconds advanced per step
    pub fn timestep(&self) -> f32 {
        self.timestep
    }
}

impl Default for SimulationHost {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}
