//! Outline primitives for 2D shapes
//!
//! Outlines are pure geometry centred on the origin - no colors or physics.
//! Vertices are listed in order around the perimeter so they can be fanned
//! into triangles or handed to a collision engine as a convex polygon.

use crate::Vec2;
use std::f32::consts::{PI, TAU};

/// Vertices of a regular polygon centred on the origin
///
/// Vertex `i` sits at angle `PI / sides + i * TAU / sides`, so the first
/// vertex is offset by half a sector. A triangle therefore starts at `PI / 3`.
///
/// Returns an empty outline when `sides < 3`.
pub fn regular_polygon(sides: usize, radius: f32) -> Vec<Vec2> {
    if sides < 3 {
        return Vec::new();
    }
    let theta = TAU / sides as f32;
    let offset = PI / sides as f32;
    (0..sides)
        .map(|i| Vec2::from_angle(offset + i as f32 * theta) * radius)
        .collect()
}

/// Approximate a circle with `segments` vertices starting on +X
pub fn circle_outline(radius: f32, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    let theta = TAU / segments as f32;
    (0..segments)
        .map(|i| Vec2::from_angle(i as f32 * theta) * radius)
        .collect()
}

/// Axis-aligned rectangle outline with the given half extents
pub fn rectangle_outline(half_extents: Vec2) -> [Vec2; 4] {
    let Vec2 { x: hx, y: hy } = half_extents;
    [
        Vec2::new(-hx, -hy),
        Vec2::new(hx, -hy),
        Vec2::new(hx, hy),
        Vec2::new(-hx, hy),
    ]
}

/// Unsigned area of a simple polygon (shoelace formula)
pub fn polygon_area(vertices: &[Vec2]) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    (twice_area * 0.5).abs()
}
