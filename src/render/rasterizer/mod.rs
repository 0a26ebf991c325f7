//! Triangle rasterization algorithms.
//!
//! This module provides two rasterizer implementations that can be swapped
//! for testing and benchmarking purposes.
//!
//! Available algorithms:
//! - [`ScanlineRasterizer`]: Flat-top/flat-bottom triangle decomposition
//! - [`EdgeFunctionRasterizer`]: Bounding box iteration with edge function tests

mod edgefunction;
mod scanline;

pub use edgefunction::EdgeFunctionRasterizer;
pub use scanline::ScanlineRasterizer;

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// A triangle in screen space. The fill color is chosen per draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
}

impl Triangle {
    pub fn new(points: [Vec2; 3]) -> Self {
        Self { points }
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a pixel buffer.
/// This allows swapping between different rasterization strategies
/// (scanline, edge functions, etc.) for testing and benchmarking.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer with a single color.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: u32);
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Scanline rasterizer using flat-top/flat-bottom triangle decomposition.
    #[default]
    Scanline,
    /// Edge function rasterizer that tests each pixel in the bounding box.
    EdgeFunction,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Scanline => write!(f, "Scanline"),
            RasterizerType::EdgeFunction => write!(f, "EdgeFunction"),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
#[derive(Default)]
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    edge_function: EdgeFunctionRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            active: rasterizer_type,
            ..Self::default()
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: u32) {
        match self.active {
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, buffer, color),
            RasterizerType::EdgeFunction => {
                self.edge_function.fill_triangle(triangle, buffer, color)
            }
        }
    }
}
