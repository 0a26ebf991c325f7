//! Scanline-based triangle rasterization.
//!
//! The scanline algorithm processes triangles one horizontal line at a time:
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Decompose** the triangle into a flat-bottom and/or flat-top half
//! 3. **Rasterize** each scanline by computing left/right edge intersections
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//! ```
//!
//! For each scanline: `x = x_start + inv_slope * (y - y_start)` where
//! `inv_slope = dx / dy`.

use super::{Rasterizer, Triangle};
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Scanline-based triangle rasterizer.
///
/// Only touches pixels actually covered, row by row.
#[derive(Default)]
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices so that `v0.y <= v1.y <= v2.y`.
    fn sort_vertices(v0: &mut Vec2, v1: &mut Vec2, v2: &mut Vec2) {
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
        if v2.y < v1.y {
            std::mem::swap(v1, v2);
        }
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
    }

    /// Point on the long edge `v0 -> v2` at the height of `v1`.
    fn split_point(v0: Vec2, v1: Vec2, v2: Vec2) -> Vec2 {
        let inv_slope = (v2.x - v0.x) / (v2.y - v0.y);
        Vec2::new(v0.x + inv_slope * (v1.y - v0.y), v1.y)
    }

    /// Integer rows within `[top, bottom]`, clipped to the buffer.
    fn rows(top: f32, bottom: f32, buffer: &FrameBuffer) -> std::ops::RangeInclusive<i32> {
        (top.ceil() as i32).max(0)..=(bottom.floor() as i32).min(buffer.height() as i32 - 1)
    }

    /// `v0` on top, `v1`/`v2` share the bottom row.
    fn fill_flat_bottom(v0: Vec2, v1: Vec2, v2: Vec2, buffer: &mut FrameBuffer, color: u32) {
        let height = v1.y - v0.y;
        if height.abs() < f32::EPSILON {
            return;
        }
        let inv_slope_1 = (v1.x - v0.x) / height;
        let inv_slope_2 = (v2.x - v0.x) / height;

        for y in Self::rows(v0.y, v1.y, buffer) {
            let dy = y as f32 - v0.y;
            let x1 = v0.x + inv_slope_1 * dy;
            let x2 = v0.x + inv_slope_2 * dy;
            buffer.fill_scanline(y, x1.min(x2).ceil() as i32, x1.max(x2).floor() as i32, color);
        }
    }

    /// `v0`/`v1` share the top row, `v2` at the bottom.
    fn fill_flat_top(v0: Vec2, v1: Vec2, v2: Vec2, buffer: &mut FrameBuffer, color: u32) {
        let height = v2.y - v0.y;
        if height.abs() < f32::EPSILON {
            return;
        }
        let inv_slope_1 = (v2.x - v0.x) / height;
        let inv_slope_2 = (v2.x - v1.x) / height;

        for y in Self::rows(v0.y, v2.y, buffer) {
            let dy = y as f32 - v0.y;
            let x1 = v0.x + inv_slope_1 * dy;
            let x2 = v1.x + inv_slope_2 * dy;
            buffer.fill_scanline(y, x1.min(x2).ceil() as i32, x1.max(x2).floor() as i32, color);
        }
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: u32) {
        let [mut v0, mut v1, mut v2] = triangle.points;
        if !(v0.is_finite() && v1.is_finite() && v2.is_finite()) {
            return;
        }

        Self::sort_vertices(&mut v0, &mut v1, &mut v2);

        if (v1.y - v2.y).abs() < f32::EPSILON {
            Self::fill_flat_bottom(v0, v1, v2, buffer, color);
            return;
        }

        if (v0.y - v1.y).abs() < f32::EPSILON {
            Self::fill_flat_top(v0, v1, v2, buffer, color);
            return;
        }

        let split = Self::split_point(v0, v1, v2);
        Self::fill_flat_bottom(v0, v1, split, buffer, color);
        Self::fill_flat_top(v1, split, v2, buffer, color);
    }
}
