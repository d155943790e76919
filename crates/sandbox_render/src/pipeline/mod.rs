//! Rendering pipeline components
//!
//! A single render pipeline that draws flat-colour triangles.

pub mod types;
pub mod shape_pipeline;

// Re-export types
pub use types::{Vertex2D, ViewportUniforms};

// Re-export pipelines
pub use shape_pipeline::ShapePipeline;
