//! Perspective projection of the software renderer.
//!
//! A single fixed transform: each point's depth is pushed back by a constant
//! camera distance, x and y are divided by that shifted depth and scaled by
//! the screen size, then moved to the screen centre.

use crate::config::CAMERA_DISTANCE;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Fixed perspective projection onto a `width` × `height` screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    width: f32,
    height: f32,
    camera_distance: f32,
}

impl Projection {
    /// Creates a projection using [`CAMERA_DISTANCE`].
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_camera_distance(width, height, CAMERA_DISTANCE)
    }

    pub fn with_camera_distance(width: u32, height: u32, camera_distance: f32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            camera_distance,
        }
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    /// Whether `point` is strictly in front of the camera plane.
    ///
    /// [`Projection::project`] does not check this; points failing it come
    /// out inverted or non-finite.
    pub fn is_in_front(&self, point: Vec3) -> bool {
        point.z + self.camera_distance > 0.0
    }

    /// Projects a point to screen coordinates.
    ///
    /// `screen_x = x * W / (z + d) + W/2`, `screen_y = y * H / (z + d) + H/2`.
    /// Screen y is not flipped.
    pub fn project(&self, point: Vec3) -> Vec2 {
        let depth = point.z + self.camera_distance;
        Vec2::new(
            point.x * self.width / depth + self.width / 2.0,
            point.y * self.height / depth + self.height / 2.0,
        )
    }
}
