//! Lighting types for both renderers.

use crate::colors;
use crate::geometry::Face;
use crate::math::vec3::Vec3;

/// A light shining uniformly along a fixed direction.
///
/// The direction is used as given, without normalization, so its length
/// scales the resulting intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
}

impl DirectionalLight {
    pub const fn new(direction: Vec3) -> Self {
        Self { direction }
    }

    /// `max(dot(normal, direction), 0)`; never negative.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.dot(self.direction).max(0.0)
    }
}

/// Approximate normal of a face: the mean of its (rotated) corners.
///
/// For a cube centred on the origin this points out through the face centre.
pub fn face_normal(vertices: &[Vec3], face: &Face) -> Vec3 {
    Vec3::mean(face.indices().iter().map(|&i| vertices[i]))
}

/// Colors a face from three channel lights.
///
/// Red follows the first light, green the second and blue the third.
pub fn shade_face(normal: Vec3, lights: &[DirectionalLight; 3]) -> u32 {
    let [r, g, b] = lights.map(|light| colors::channel(light.intensity(normal)));
    colors::pack_color(r, g, b)
}

/// A positional light for the fixed-function pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    /// Multiplier for the diffuse contribution.
    pub diffuse: f32,
}

impl PointLight {
    pub const fn new(position: Vec3, diffuse: f32) -> Self {
        Self { position, diffuse }
    }

    /// Lambert term for a surface point with unit normal `normal`.
    pub fn intensity(&self, point: Vec3, normal: Vec3) -> f32 {
        let to_light = (self.position - point).normalize();
        normal.dot(to_light).max(0.0) * self.diffuse
    }
}
