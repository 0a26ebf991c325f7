//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! The constructors follow the right-handed, OpenGL-style conventions used by
//! the fixed-function pipeline: the eye looks down -Z and clip space maps the
//! near/far planes to NDC z = -1/+1.

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed rotation of `angle` radians about an arbitrary axis.
    ///
    /// The axis is normalized first; a zero axis yields the identity.
    pub fn rotation_axis(angle: f32, axis: Vec3) -> Self {
        if axis == Vec3::ZERO {
            return Mat4::identity();
        }
        let Vec3 { x, y, z } = axis.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Mat4::new([
            [x * x * t + c, x * y * t - z * s, x * z * t + y * s, 0.0],
            [y * x * t + z * s, y * y * t + c, y * z * t - x * s, 0.0],
            [x * z * t - y * s, y * z * t + x * s, z * z * t + c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Right-handed perspective projection in the OpenGL clip-space convention.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > near)
    pub fn perspective_rh_gl(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let a = (far + near) / (near - far);
        let b = 2.0 * far * near / (near - far);
        Mat4::new([
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, a, b],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.data[row][k] * rhs.data[k][col]).sum();
            }
        }

        Mat4::new(result)
    }
}

/// Transform a homogeneous vector: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn rotation_about_x_matches_vector_rotation() {
        let p = Vec3::new(0.3, -1.2, 0.7);
        let m = Mat4::rotation_axis(0.8, Vec3::X);
        assert_relative_eq!((m * Vec4::point(p)).xyz(), p.rotate_x(0.8), epsilon = 1e-5);
    }

    #[test]
    fn rotation_about_y_matches_vector_rotation() {
        let p = Vec3::new(-1.0, -1.0, -1.0);
        let m = Mat4::rotation_axis(FRAC_PI_2, Vec3::new(0.0, 3.0, 0.0));
        assert_relative_eq!((m * Vec4::point(p)).xyz(), p.rotate_y(FRAC_PI_2), epsilon = 1e-5);
    }

    #[test]
    fn zero_axis_is_identity() {
        assert_eq!(Mat4::rotation_axis(1.0, Vec3::ZERO), Mat4::identity());
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let moved = m * Vec4::point(Vec3::ZERO);
        assert_eq!(moved.xyz(), Vec3::new(1.0, 2.0, 3.0));
        let dir = m * Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(dir.xyz(), Vec3::X);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let m = Mat4::perspective_rh_gl(FRAC_PI_4, 4.0 / 3.0, 0.1, 50.0);
        let near = (m * Vec4::point(Vec3::new(0.0, 0.0, -0.1)))
            .perspective_divide()
            .unwrap();
        let far = (m * Vec4::point(Vec3::new(0.0, 0.0, -50.0)))
            .perspective_divide()
            .unwrap();
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let t = Mat4::translation(0.0, 0.0, -5.0);
        let r = Mat4::rotation_axis(FRAC_PI_2, Vec3::Y);
        let p = (t * r) * Vec4::point(Vec3::X);
        assert_relative_eq!(p.xyz(), Vec3::new(0.0, 0.0, -6.0), epsilon = 1e-5);
    }
}
