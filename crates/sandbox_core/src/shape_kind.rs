//! Shape kinds and their construction mapping
//!
//! Spawning and importing both go through [`ShapeKind::collider`], so a body
//! built from the mouse and one rebuilt from a document get the same
//! geometry for the same `size`.

use sandbox_math::{regular_polygon, Vec2};
use sandbox_physics::ColliderShape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The shapes a user can spawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Circle whose diameter is `size`
    Circle,
    /// Square whose side is `size`
    Rectangle,
    /// Regular triangle whose circumradius is `size / 2`
    Triangle,
}

impl ShapeKind {
    /// All kinds, in key-binding order
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Triangle];

    /// Look up a kind by its document/control name
    ///
    /// Names are matched exactly; anything else is an unknown shape.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "circle" => Some(ShapeKind::Circle),
            "rectangle" => Some(ShapeKind::Rectangle),
            "triangle" => Some(ShapeKind::Triangle),
            _ => None,
        }
    }

    /// Name used in documents and controls
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Collision shape for a body of this kind and size
    pub fn collider(self, size: f32) -> ColliderShape {
        let half = size / 2.0;
        match self {
            ShapeKind::Circle => ColliderShape::ball(half),
            ShapeKind::Rectangle => ColliderShape::cuboid(half, half),
            ShapeKind::Triangle => ColliderShape::triangle(Self::triangle_vertices(half)),
        }
    }

    fn triangle_vertices(circumradius: f32) -> [Vec2; 3] {
        let outline = regular_polygon(3, circumradius);
        [outline[0], outline[1], outline[2]]
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(ShapeKind::from_name("hexagon"), None);
        assert_eq!(ShapeKind::from_name("Circle"), None);
        assert_eq!(ShapeKind::from_name(""), None);
    }

    #[test]
    fn test_circle_collider_radius_is_half_size() {
        assert_eq!(ShapeKind::Circle.collider(40.0), ColliderShape::ball(20.0));
    }

    #[test]
    fn test_rectangle_collider_is_square() {
        assert_eq!(ShapeKind::Rectangle.collider(50.0), ColliderShape::cuboid(25.0, 25.0));
    }

    #[test]
    fn test_triangle_collider_circumradius() {
        match ShapeKind::Triangle.collider(30.0) {
            ColliderShape::Triangle { vertices } => {
                for v in vertices {
                    assert!((v.length() - 15.0).abs() < 0.0001);
                }
            }
            other => panic!("expected triangle, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&ShapeKind::Rectangle).unwrap();
        assert_eq!(json, "\"rectangle\"");
    }
}
