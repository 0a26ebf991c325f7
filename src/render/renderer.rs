//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color buffer and implements
//! basic drawing operations: clearing, lines and filled convex polygons.

use super::framebuffer::FrameBuffer;
use super::rasterizer::{Rasterizer, Triangle};
use crate::colors;
use crate::math::vec2::Vec2;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Fills a convex polygon as a fan of triangles around its first vertex.
    ///
    /// Fewer than three points draw nothing.
    pub fn fill_polygon<R: Rasterizer + ?Sized>(
        &mut self,
        points: &[Vec2],
        color: u32,
        rasterizer: &R,
    ) {
        let Some((&anchor, rest)) = points.split_first() else {
            return;
        };
        let mut fb = self.as_framebuffer();
        for pair in rest.windows(2) {
            let triangle = Triangle::new([anchor, pair[0], pair[1]]);
            rasterizer.fill_triangle(&triangle, &mut fb, color);
        }
    }

    /// Draws a line between two screen points, truncating to whole pixels.
    ///
    /// The segment is clipped to the buffer first, so only visible pixels are
    /// visited. Non-finite endpoints draw nothing.
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: u32) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }
        let Some(([x0, y0], [x1, y1])) = self.clip_segment(from, to) else {
            return;
        };
        self.draw_line_bresenham(x0, y0, x1, y1, color);
    }

    /// Liang-Barsky clip of a segment against `[0, width] x [0, height]`.
    ///
    /// Works in f64 so endpoints far off screen still clip to the right
    /// pixels, and clamps the result so the integer casts stay in range.
    fn clip_segment(&self, from: Vec2, to: Vec2) -> Option<([i32; 2], [i32; 2])> {
        let (x0, y0) = (from.x as f64, from.y as f64);
        let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
        let (max_x, max_y) = (self.width as f64, self.height as f64);

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;
        for (p, q) in [(-dx, x0), (dx, max_x - x0), (-dy, y0), (dy, max_y - y0)] {
            if p == 0.0 {
                // Parallel to this boundary and outside it.
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }
            if t_enter > t_exit {
                return None;
            }
        }

        let at = |t: f64| {
            [
                (x0 + t * dx).clamp(0.0, max_x) as i32,
                (y0 + t * dy).clamp(0.0, max_y) as i32,
            ]
        };
        Some((at(t_enter), at(t_exit)))
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// For each step along the major axis, an error term decides whether to
    /// also step along the minor axis. Integer arithmetic only.
    fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can hold, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// The color buffer as raw ARGB8888 bytes, ready for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // byte length covers exactly the initialized u32 elements.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }
}
