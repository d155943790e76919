//! 2D Mathematics Library
//!
//! This crate provides the vector type and shape outlines shared by the
//! sandbox's physics adapter, body bookkeeping and renderer.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in screen space (y grows downward)
//!
//! ## Shape Outlines
//!
//! - [`regular_polygon`] - Regular n-gon, first vertex half a sector past +X
//! - [`circle_outline`] - Circle approximation for drawing
//! - [`rectangle_outline`] - Axis-aligned box
//! - [`polygon_area`] - Shoelace area

mod vec2;
pub mod shape;

pub use vec2::Vec2;
pub use shape::{circle_outline, polygon_area, rectangle_outline, regular_polygon};
