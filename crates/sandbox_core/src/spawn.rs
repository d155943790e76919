//! Spawn controls and requests
//!
//! [`SpawnControls`] holds the raw text of the four user controls (shape,
//! mode, mass, size). Each spawn reads them afresh through
//! [`SpawnControls::request`], so a control edit applies to the next body.

use crate::body::{BodySpec, FillStyle};
use crate::shape_kind::ShapeKind;
use sandbox_math::Vec2;

/// Mode string that makes spawned bodies static
pub const STATIC_MODE: &str = "static";
/// Mode string used when toggling away from static
pub const DYNAMIC_MODE: &str = "dynamic";

/// Current values of the spawn controls, as text
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnControls {
    pub shape: String,
    pub mode: String,
    pub mass: String,
    pub size: String,
}

impl Default for SpawnControls {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle.name().to_string(),
            mode: DYNAMIC_MODE.to_string(),
            mass: String::new(),
            size: "40".to_string(),
        }
    }
}

impl SpawnControls {
    /// Build a spawn request from the current values
    ///
    /// Returns `None` for an unknown shape or a size that is not a positive
    /// number.
    pub fn request(&self) -> Option<SpawnRequest> {
        let kind = ShapeKind::from_name(self.shape.trim())?;
        let size = parse_number(&self.size).filter(|size| *size > 0.0)?;
        let mass = parse_number(&self.mass).filter(|mass| *mass != 0.0);
        Some(SpawnRequest {
            kind,
            size,
            is_static: self.is_static(),
            mass,
        })
    }

    /// Whether the mode control selects static bodies
    pub fn is_static(&self) -> bool {
        self.mode.trim() == STATIC_MODE
    }

    /// Select a shape
    pub fn select_shape(&mut self, kind: ShapeKind) {
        self.shape = kind.name().to_string();
    }

    /// Flip between static and dynamic
    pub fn toggle_mode(&mut self) {
        self.mode = if self.is_static() { DYNAMIC_MODE } else { STATIC_MODE }.to_string();
    }

    /// Change the size by `delta`, never going below `min`
    ///
    /// An unparsable size is treated as `min`.
    pub fn adjust_size(&mut self, delta: f32, min: f32) {
        let current = parse_number(&self.size).unwrap_or(min);
        self.size = format_number((current + delta).max(min));
    }

    /// Change the mass by `delta`; reaching zero or below clears the override
    pub fn adjust_mass(&mut self, delta: f32) {
        let current = parse_number(&self.mass).unwrap_or(0.0);
        let next = current + delta;
        self.mass = if next > 0.0 { format_number(next) } else { String::new() };
    }

    /// Short status line for the window title
    pub fn summary(&self) -> String {
        let mass = if self.mass.trim().is_empty() { "auto" } else { self.mass.trim() };
        format!(
            "{} | {} | size {} | mass {}",
            self.shape.trim(),
            self.mode.trim(),
            self.size.trim(),
            mass
        )
    }
}

/// A validated spawn request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    pub kind: ShapeKind,
    pub size: f32,
    pub is_static: bool,
    /// Mass override; `None` keeps the engine default
    pub mass: Option<f32>,
}

impl SpawnRequest {
    /// Body spec for spawning this request at `position`
    ///
    /// Static bodies are filled red, all others blue.
    pub fn to_spec(&self, position: Vec2) -> BodySpec {
        let mut spec = BodySpec::new(self.kind, self.size, position)
            .with_static(self.is_static)
            .with_fill(FillStyle::for_mode(self.is_static));
        spec.mass = self.mass;
        spec
    }
}

/// Parse a control value, accepting only finite numbers
fn parse_number(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|value| value.is_finite())
}

fn format_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(shape: &str, mode: &str, mass: &str, size: &str) -> SpawnControls {
        SpawnControls {
            shape: shape.to_string(),
            mode: mode.to_string(),
            mass: mass.to_string(),
            size: size.to_string(),
        }
    }

    #[test]
    fn test_dynamic_circle_request() {
        let request = controls("circle", "dynamic", "", "40").request().unwrap();
        assert_eq!(request.kind, ShapeKind::Circle);
        assert_eq!(request.size, 40.0);
        assert!(!request.is_static);
        assert_eq!(request.mass, None);
    }

    #[test]
    fn test_static_mode() {
        let request = controls("rectangle", "static", "", "50").request().unwrap();
        assert!(request.is_static);
        let spec = request.to_spec(Vec2::new(200.0, 200.0));
        assert_eq!(spec.fill.as_str(), "red");
        assert!(spec.is_static);
    }

    #[test]
    fn test_any_other_mode_is_dynamic() {
        let request = controls("triangle", "wobbly", "", "30").request().unwrap();
        assert!(!request.is_static);
        assert_eq!(request.to_spec(Vec2::ZERO).fill.as_str(), "blue");
    }

    #[test]
    fn test_unknown_shape_gives_nothing() {
        assert!(controls("hexagon", "dynamic", "", "40").request().is_none());
    }

    #[test]
    fn test_bad_size_gives_nothing() {
        assert!(controls("circle", "dynamic", "", "abc").request().is_none());
        assert!(controls("circle", "dynamic", "", "0").request().is_none());
        assert!(controls("circle", "dynamic", "", "-5").request().is_none());
    }

    #[test]
    fn test_mass_override_rules() {
        let mass_of = |m: &str| controls("circle", "dynamic", m, "40").request().unwrap().mass;
        assert_eq!(mass_of("3.5"), Some(3.5));
        assert_eq!(mass_of("0"), None);
        assert_eq!(mass_of(""), None);
        assert_eq!(mass_of("heavy"), None);
        assert_eq!(mass_of("NaN"), None);
        assert_eq!(mass_of("inf"), None);
    }

    #[test]
    fn test_toggle_mode() {
        let mut c = SpawnControls::default();
        assert!(!c.is_static());
        c.toggle_mode();
        assert!(c.is_static());
        c.toggle_mode();
        assert_eq!(c.mode, DYNAMIC_MODE);
    }

    #[test]
    fn test_adjust_size_clamps() {
        let mut c = controls("circle", "dynamic", "", "20");
        c.adjust_size(5.0, 5.0);
        assert_eq!(c.size, "25");
        c.adjust_size(-100.0, 5.0);
        assert_eq!(c.size, "5");
    }

    #[test]
    fn test_adjust_mass_clears_at_zero() {
        let mut c = controls("circle", "dynamic", "", "20");
        c.adjust_mass(0.5);
        assert_eq!(c.mass, "0.50");
        c.adjust_mass(1.5);
        assert_eq!(c.mass, "2");
        c.adjust_mass(-2.0);
        assert_eq!(c.mass, "");
    }

    #[test]
    fn test_select_shape() {
        let mut c = SpawnControls::default();
        c.select_shape(ShapeKind::Triangle);
        assert_eq!(c.request().unwrap().kind, ShapeKind::Triangle);
    }
}
