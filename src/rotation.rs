//! Euler rotation state and the X-then-Y-then-Z point rotation.
//!
//! The state is a plain value: the frame loop owns it, hands it to the
//! renderer by reference, and replaces it with [`RotationState::advance`]
//! once per frame.

use crate::math::vec3::Vec3;

/// Per-frame increments for each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationStep {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationStep {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Accumulated rotation angles about X, Y and Z.
///
/// Angles only ever grow; they are never wrapped because every consumer goes
/// through periodic functions (`sin`, `cos`, `rem_euclid`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The state one frame later.
    #[must_use]
    pub fn advance(self, step: RotationStep) -> Self {
        Self {
            x: self.x + step.x,
            y: self.y + step.y,
            z: self.z + step.z,
        }
    }

    /// Rotates a point by this state's angles (radians).
    pub fn apply(&self, point: Vec3) -> Vec3 {
        rotate_point(point, self.x, self.y, self.z)
    }
}

/// Rotates `point` about X by `angle_x`, then Y by `angle_y`, then Z by
/// `angle_z`, each stage taking the output of the previous one.
pub fn rotate_point(point: Vec3, angle_x: f32, angle_y: f32, angle_z: f32) -> Vec3 {
    point.rotate_x(angle_x).rotate_y(angle_y).rotate_z(angle_z)
}
