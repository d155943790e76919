//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SBX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use sandbox_core::{HostConfig, PhysicsMaterial, SpawnControls, Viewport};
use sandbox_render::GeometryStyle;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Simulation loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Initial spawn controls
    #[serde(default)]
    pub spawn: SpawnConfig,
    /// Export/import configuration
    #[serde(default)]
    pub io: IoConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SBX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SBX_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SBX_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Settings for the simulation host, sized to the configured window
    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            physics: self.physics.to_physics_config(),
            viewport: Viewport::new(self.window.width as f32, self.window.height as f32),
            timestep: self.simulation.timestep,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Shape Sandbox".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravity in pixels per second squared (positive = downward)
    pub gravity: f32,
    /// Mass per square pixel used for default body mass
    pub density: f32,
    /// Friction coefficient for every collider
    pub friction: f32,
    /// Restitution (bounciness) for every collider
    pub restitution: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            density: 0.001,
            friction: 0.1,
            restitution: 0.0,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics engine's configuration
    pub fn to_physics_config(&self) -> sandbox_core::PhysicsConfig {
        sandbox_core::PhysicsConfig {
            gravity: self.gravity,
            density: self.density,
            material: PhysicsMaterial::new(self.friction, self.restitution),
        }
    }
}

/// Simulation loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seconds advanced per frame
    pub timestep: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: sandbox_core::DEFAULT_TIMESTEP,
        }
    }
}

/// Initial values of the spawn controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// circle, rectangle or triangle
    pub shape: String,
    /// "static" or anything else for dynamic
    pub mode: String,
    /// Mass override; 0 keeps the engine default
    pub mass: f32,
    /// Size in pixels
    pub size: f32,
    /// Size change per key press
    pub size_step: f32,
    /// Mass change per key press
    pub mass_step: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        let controls = SpawnControls::default();
        Self {
            shape: controls.shape,
            mode: controls.mode,
            mass: 0.0,
            size: 40.0,
            size_step: 5.0,
            mass_step: 0.5,
        }
    }
}

impl SpawnConfig {
    /// Build the initial control values
    pub fn to_controls(&self) -> SpawnControls {
        SpawnControls {
            shape: self.shape.clone(),
            mode: self.mode.clone(),
            mass: if self.mass > 0.0 { self.mass.to_string() } else { String::new() },
            size: self.size.to_string(),
        }
    }
}

/// Export/import configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    /// Directory exports are written to and "import latest" reads from
    pub export_dir: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("exports"),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Ground color [r, g, b, a]
    pub ground_color: [f32; 4],
    /// Segments used to draw circles
    pub circle_segments: usize,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let style = GeometryStyle::default();
        Self {
            background_color: [0.95, 0.95, 0.95, 1.0],
            ground_color: style.ground_color,
            circle_segments: style.circle_segments,
        }
    }
}

impl RenderingConfig {
    /// Drawing parameters for geometry tessellation
    pub fn geometry_style(&self) -> GeometryStyle {
        GeometryStyle {
            circle_segments: self.circle_segments.max(3),
            ground_color: self.ground_color,
            ..GeometryStyle::default()
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.physics.gravity, 1000.0);
        assert_eq!(config.spawn.shape, "circle");
        assert_eq!(config.spawn.size, 40.0);
        assert_eq!(config.spawn.to_controls().size, "40");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("export_dir"));
    }

    #[test]
    fn test_host_config_uses_window_size() {
        let mut config = AppConfig::default();
        config.window.width = 800;
        config.window.height = 600;
        let host = config.host_config();
        assert_eq!(host.viewport.width, 800.0);
        assert_eq!(host.viewport.height, 600.0);
        assert_eq!(host.physics.gravity, 1000.0);
    }

    #[test]
    fn test_spawn_config_to_controls() {
        let spawn = SpawnConfig {
            shape: "triangle".to_string(),
            mode: "static".to_string(),
            mass: 2.5,
            size: 60.0,
            ..Default::default()
        };
        let controls = spawn.to_controls();
        assert_eq!(controls.shape, "triangle");
        assert!(controls.is_static());
        assert_eq!(controls.mass, "2.5");
        assert_eq!(controls.size, "60");
        assert_eq!(controls.request().unwrap().mass, Some(2.5));
    }

    #[test]
    fn test_zero_mass_keeps_engine_default() {
        let controls = SpawnConfig::default().to_controls();
        assert_eq!(controls.mass, "");
        assert_eq!(controls.request().unwrap().mass, None);
    }

    #[test]
    fn test_geometry_style_clamps_segments() {
        let rendering = RenderingConfig {
            circle_segments: 1,
            ..Default::default()
        };
        assert_eq!(rendering.geometry_style().circle_segments, 3);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[window]\ntitle = \"Partial\"\nwidth = 640\nheight = 480\nvsync = false\n"))
            .extract()
            .unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.io.export_dir, PathBuf::from("exports"));
    }
}
