//! Homogeneous coordinates for the fixed-function pipeline.

use super::vec3::Vec3;

/// A clip-space or homogeneous position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// A position (w=1).
    pub const fn point(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Drops w without dividing.
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Normalized device coordinates, or `None` when the point sits on or
    /// behind the eye plane (`w <= 0`).
    pub fn perspective_divide(self) -> Option<Vec3> {
        if self.w <= 0.0 {
            return None;
        }
        Some(Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w))
    }
}

impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Self {
        Self::point(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_rejects_points_behind_eye() {
        assert_eq!(Vec4::new(1.0, 1.0, 1.0, 0.0).perspective_divide(), None);
        assert_eq!(Vec4::new(1.0, 1.0, 1.0, -2.0).perspective_divide(), None);
    }

    #[test]
    fn divide_scales_by_w() {
        let ndc = Vec4::new(2.0, -4.0, 1.0, 2.0).perspective_divide();
        assert_eq!(ndc, Some(Vec3::new(1.0, -2.0, 0.5)));
    }
}
