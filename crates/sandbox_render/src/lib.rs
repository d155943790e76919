//! 2D Rendering Library
//!
//! This crate provides the wgpu-based renderer for the shape sandbox.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Flat-colour triangle pipeline
//! - [`renderable::ShapeGeometry`] - Tessellates the host's bodies each frame

pub mod context;
pub mod pipeline;
pub mod renderable;

// Re-export renderable for easy access
pub use renderable::{body_outline, fill_color, GeometryStyle, ShapeGeometry};
