//! Two rotating-cube renderers.
//!
//! - The software path rotates, projects and shades the cube on the CPU and
//!   uses SDL2 only to show the resulting color buffer.
//! - The hardware path feeds vertices, edges and light positions to a
//!   fixed-function style [`pipeline::Pipeline`] and draws the resulting
//!   segments with SDL2's accelerated renderer.
//!
//! # Quick Start
//!
//! ```ignore
//! use spinning_cube::prelude::*;
//!
//! let mut window = Window::new("Cube", 800, 600)?;
//! let mut engine = Engine::new(800, 600);
//! let state = RotationState::default();
//! let frame = engine.prepare(&state);
//! engine.render(&frame);
//! window.present(engine.frame_buffer())?;
//! ```

pub mod colors;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod light;
pub mod math;
pub mod pipeline;
pub mod projection;
pub mod rotation;
pub mod visibility;
pub mod window;

pub(crate) mod render;

pub use engine::{Engine, FrameGeometry, ShadedFace};
pub use geometry::{Cube, Edge, Face, GeometryError};
pub use pipeline::{LineSegment, Pipeline};
pub use projection::Projection;
pub use render::RasterizerType;
pub use rotation::{rotate_point, RotationState, RotationStep};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{Engine, FrameGeometry};
    pub use crate::geometry::Cube;
    pub use crate::light::{DirectionalLight, PointLight};
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::pipeline::Pipeline;
    pub use crate::projection::Projection;
    pub use crate::rotation::{RotationState, RotationStep};
    pub use crate::visibility::{select_band, visible_faces, FaceBand};
    pub use crate::window::{FpsCounter, FrameLimiter, FramePacing, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        EdgeFunctionRasterizer, FrameBuffer, Rasterizer, ScanlineRasterizer, Triangle,
    };
}
