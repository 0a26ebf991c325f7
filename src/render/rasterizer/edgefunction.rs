//! Edge function-based triangle rasterization.
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! This is the 2D cross product (B - A) × (P - A). A pixel centre is inside
//! the triangle when all three edge functions share the sign of the
//! triangle's signed area, which handles both winding orders.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::{Rasterizer, Triangle};
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;

/// Triangle rasterizer using the edge function algorithm.
///
/// Iterates over the triangle's bounding box (clipped to the buffer) and
/// tests each pixel centre.
#[derive(Default)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    /// Positive when `p` is left of `a -> b`, negative when right, zero on it.
    #[inline]
    fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: u32) {
        let [v0, v1, v2] = triangle.points;
        if !(v0.is_finite() && v1.is_finite() && v2.is_finite()) {
            return;
        }

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        let area = Self::edge_function(v0, v1, v2);
        if area.abs() < f32::EPSILON {
            return;
        }

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let w0 = Self::edge_function(v1, v2, p);
                let w1 = Self::edge_function(v2, v0, p);
                let w2 = Self::edge_function(v0, v1, p);

                let inside = if area > 0.0 {
                    w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
                } else {
                    w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
                };

                if inside {
                    buffer.set_pixel(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_function_sign_tracks_side() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(EdgeFunctionRasterizer::edge_function(a, b, Vec2::new(5.0, 5.0)) < 0.0);
        assert!(EdgeFunctionRasterizer::edge_function(a, b, Vec2::new(5.0, -5.0)) > 0.0);
        assert_eq!(EdgeFunctionRasterizer::edge_function(a, b, Vec2::new(3.0, 0.0)), 0.0);
    }

    #[test]
    fn winding_order_does_not_matter() {
        let ccw = Triangle::new(
            [Vec2::new(1.0, 1.0), Vec2::new(9.0, 1.0), Vec2::new(5.0, 8.0)],
        );
        let cw = Triangle::new([ccw.points[0], ccw.points[2], ccw.points[1]]);

        let fill = |tri: &Triangle| {
            let mut data = vec![0u32; 10 * 10];
            let mut fb = FrameBuffer::new(&mut data, 10, 10);
            EdgeFunctionRasterizer::new().fill_triangle(tri, &mut fb, 1);
            data
        };
        let a = fill(&ccw);
        assert!(a.iter().any(|&c| c == 1));
        assert_eq!(a, fill(&cw));
    }
}
