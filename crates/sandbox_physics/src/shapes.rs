//! Collision shapes for the physics adapter
//!
//! These are lightweight descriptions converted into rapier colliders on
//! insertion, separate from the drawable outlines in sandbox_math.

use rapier2d::prelude::{ColliderBuilder, Point};
use sandbox_math::{polygon_area, rectangle_outline, Vec2};

/// Smallest extent handed to the engine; degenerate shapes are inflated to it
pub const MIN_EXTENT: f32 = 0.01;

/// A collision shape centred on its body's origin
#[derive(Clone, Debug, PartialEq)]
pub enum ColliderShape {
    /// Circle with the given radius
    Ball { radius: f32 },
    /// Axis-aligned box (before rotation) with the given half extents
    Cuboid { half_extents: Vec2 },
    /// Triangle given by three local vertices
    Triangle { vertices: [Vec2; 3] },
}

impl ColliderShape {
    /// Create a ball collider
    pub fn ball(radius: f32) -> Self {
        Self::Ball { radius }
    }

    /// Create a box collider from half extents
    pub fn cuboid(half_width: f32, half_height: f32) -> Self {
        Self::Cuboid {
            half_extents: Vec2::new(half_width, half_height),
        }
    }

    /// Create a triangle collider from local vertices
    pub fn triangle(vertices: [Vec2; 3]) -> Self {
        Self::Triangle { vertices }
    }

    /// Area of the shape in square pixels
    pub fn area(&self) -> f32 {
        match self {
            ColliderShape::Ball { radius } => std::f32::consts::PI * radius * radius,
            ColliderShape::Cuboid { half_extents } => {
                polygon_area(&rectangle_outline(*half_extents))
            }
            ColliderShape::Triangle { vertices } => polygon_area(vertices),
        }
    }

    /// Convert to a rapier collider builder
    pub(crate) fn to_builder(&self) -> ColliderBuilder {
        match self {
            ColliderShape::Ball { radius } => ColliderBuilder::ball(radius.abs().max(MIN_EXTENT)),
            ColliderShape::Cuboid { half_extents } => ColliderBuilder::cuboid(
                half_extents.x.abs().max(MIN_EXTENT),
                half_extents.y.abs().max(MIN_EXTENT),
            ),
            ColliderShape::Triangle { vertices } => {
                if polygon_area(vertices) < MIN_EXTENT * MIN_EXTENT {
                    return ColliderBuilder::ball(MIN_EXTENT);
                }
                let [a, b, c] = *vertices;
                ColliderBuilder::triangle(
                    Point::new(a.x, a.y),
                    Point::new(b.x, b.y),
                    Point::new(c.x, c.y),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_math::regular_polygon;

    #[test]
    fn test_ball_area() {
        let shape = ColliderShape::ball(20.0);
        assert!((shape.area() - std::f32::consts::PI * 400.0).abs() < 0.01);
    }

    #[test]
    fn test_cuboid_area() {
        let shape = ColliderShape::cuboid(25.0, 10.0);
        assert!((shape.area() - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_triangle_area_matches_outline() {
        let outline = regular_polygon(3, 10.0);
        let shape = ColliderShape::triangle([outline[0], outline[1], outline[2]]);
        assert!((shape.area() - polygon_area(&outline)).abs() < 0.0001);
    }

    #[test]
    fn test_degenerate_triangle_still_builds() {
        let shape = ColliderShape::triangle([Vec2::ZERO; 3]);
        assert_eq!(shape.area(), 0.0);
        // Must not panic
        let _ = shape.to_builder().build();
    }
}
