//! Renderable geometry - bridges the simulation host to GPU buffers
//!
//! Every frame the host's bodies are tessellated into one triangle list:
//! circles as segment fans, rectangles and triangles as polygon fans, all
//! rotated by the body's current angle.

use sandbox_core::{BodyView, FillStyle, ShapeKind, SimulationHost};
use sandbox_math::{circle_outline, rectangle_outline, regular_polygon, Vec2};

use crate::pipeline::Vertex2D;

/// Color used for fill styles that are not recognised
pub const UNKNOWN_FILL: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Drawing parameters that do not come from bodies
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryStyle {
    /// Segments used to approximate circles
    pub circle_segments: usize,
    /// Ground fill color (RGBA)
    pub ground_color: [f32; 4],
    /// Ground size in pixels (width, height)
    pub ground_size: Vec2,
}

impl Default for GeometryStyle {
    fn default() -> Self {
        Self {
            circle_segments: 32,
            ground_color: [0.35, 0.35, 0.38, 1.0],
            ground_size: Vec2::new(100_000.0, 100.0),
        }
    }
}

/// GPU-ready triangle list collected from the host
pub struct ShapeGeometry {
    /// Triangle list vertices (three per triangle)
    pub vertices: Vec<Vertex2D>,
}

impl ShapeGeometry {
    /// Create empty geometry
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    /// Create geometry with pre-allocated capacity
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Collect the ground and every body, bodies drawn in registry order
    pub fn from_host(host: &SimulationHost, style: &GeometryStyle) -> Self {
        let registry = host.registry();
        let mut result = Self::with_capacity(6 + registry.len() * style.circle_segments * 3);

        let half_ground = style.ground_size * 0.5;
        result.add_polygon(
            host.ground_position(),
            &rectangle_outline(half_ground),
            0.0,
            style.ground_color,
        );
        for view in registry.iter() {
            result.add_body(&view, style);
        }
        result
    }

    /// Add one body's triangles
    pub fn add_body(&mut self, view: &BodyView<'_>, style: &GeometryStyle) {
        let outline = body_outline(view.body.kind, view.body.size, style.circle_segments);
        let color = fill_color(&view.body.fill);
        self.add_polygon(view.position(), &outline, view.angle(), color);
    }

    /// Fan-triangulate a convex outline around its first vertex
    pub fn add_polygon(&mut self, center: Vec2, outline: &[Vec2], angle: f32, color: [f32; 4]) {
        if outline.len() < 3 {
            return;
        }
        let to_world = |v: Vec2| (center + v.rotated(angle)).to_array();
        let anchor = to_world(outline[0]);
        for pair in outline[1..].windows(2) {
            self.vertices.push(Vertex2D::new(anchor, color));
            self.vertices.push(Vertex2D::new(to_world(pair[0]), color));
            self.vertices.push(Vertex2D::new(to_world(pair[1]), color));
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Default for ShapeGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Local-space outline of a body, matching its collider
pub fn body_outline(kind: ShapeKind, size: f32, circle_segments: usize) -> Vec<Vec2> {
    let half = size / 2.0;
    match kind {
        ShapeKind::Circle => circle_outline(half, circle_segments),
        ShapeKind::Rectangle => rectangle_outline(Vec2::new(half, half)).to_vec(),
        ShapeKind::Triangle => regular_polygon(3, half),
    }
}

/// Resolve a fill style to RGBA
///
/// Understands the named colors the sandbox uses plus `#rgb` and `#rrggbb`.
pub fn fill_color(fill: &FillStyle) -> [f32; 4] {
    parse_color(fill.as_str()).unwrap_or(UNKNOWN_FILL)
}

fn parse_color(text: &str) -> Option<[f32; 4]> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex);
    }
    let rgb = match text.to_ascii_lowercase().as_str() {
        "red" => [1.0, 0.0, 0.0],
        "blue" => [0.0, 0.0, 1.0],
        "green" => [0.0, 0.5, 0.0],
        "lime" => [0.0, 1.0, 0.0],
        "yellow" => [1.0, 1.0, 0.0],
        "orange" => [1.0, 0.65, 0.0],
        "purple" => [0.5, 0.0, 0.5],
        "cyan" => [0.0, 1.0, 1.0],
        "magenta" => [1.0, 0.0, 1.0],
        "black" => [0.0, 0.0, 0.0],
        "white" => [1.0, 1.0, 1.0],
        "gray" | "grey" => [0.5, 0.5, 0.5],
        _ => return None,
    };
    Some([rgb[0], rgb[1], rgb[2], 1.0])
}

fn parse_hex(hex: &str) -> Option<[f32; 4]> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        6 => Some([
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
            1.0,
        ]),
        3 => {
            let short = |i: usize| {
                let c = hex.get(i..i + 1)?;
                channel(&format!("{c}{c}"))
            };
            Some([short(0)?, short(1)?, short(2)?, 1.0])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_core::{BodySpec, HostConfig, Viewport};

    #[test]
    fn test_named_fills() {
        assert_eq!(fill_color(&FillStyle::from("red")), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(fill_color(&FillStyle::from("blue")), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_hex_fills() {
        assert_eq!(fill_color(&FillStyle::from("#00ff00")), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(fill_color(&FillStyle::from("#f00")), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_fill_is_grey() {
        assert_eq!(fill_color(&FillStyle::from("sparkly")), UNKNOWN_FILL);
        assert_eq!(fill_color(&FillStyle::from("#12345")), UNKNOWN_FILL);
        assert_eq!(fill_color(&FillStyle::from("#gggggg")), UNKNOWN_FILL);
    }

    #[test]
    fn test_outline_vertex_counts() {
        assert_eq!(body_outline(ShapeKind::Circle, 40.0, 24).len(), 24);
        assert_eq!(body_outline(ShapeKind::Rectangle, 40.0, 24).len(), 4);
        assert_eq!(body_outline(ShapeKind::Triangle, 40.0, 24).len(), 3);
    }

    #[test]
    fn test_polygon_fan() {
        let mut geometry = ShapeGeometry::new();
        let square = rectangle_outline(Vec2::new(1.0, 1.0));
        geometry.add_polygon(Vec2::new(10.0, 10.0), &square, 0.0, [1.0; 4]);
        assert_eq!(geometry.triangle_count(), 2);
        assert_eq!(geometry.vertices[0].position, [9.0, 9.0]);
    }

    #[test]
    fn test_degenerate_outline_skipped() {
        let mut geometry = ShapeGeometry::new();
        geometry.add_polygon(Vec2::ZERO, &[Vec2::ZERO, Vec2::new(1.0, 0.0)], 0.0, [1.0; 4]);
        assert_eq!(geometry.vertex_count(), 0);
    }

    #[test]
    fn test_from_host_includes_ground_and_bodies() {
        let mut host = SimulationHost::new(HostConfig {
            viewport: Viewport::new(800.0, 600.0),
            ..Default::default()
        });
        host.add(BodySpec::new(ShapeKind::Rectangle, 20.0, Vec2::new(100.0, 100.0)));
        host.add(BodySpec::new(ShapeKind::Triangle, 20.0, Vec2::new(200.0, 100.0)));
        host.add(BodySpec::new(ShapeKind::Circle, 20.0, Vec2::new(300.0, 100.0)));

        let style = GeometryStyle {
            circle_segments: 16,
            ..Default::default()
        };
        let geometry = ShapeGeometry::from_host(&host, &style);

        // ground 2 + rectangle 2 + triangle 1 + circle 14
        assert_eq!(geometry.triangle_count(), 19);
        // Ground is drawn first, in the ground color
        assert_eq!(geometry.vertices[0].color, style.ground_color);
    }
}
