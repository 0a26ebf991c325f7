//! Small fixed-size vector and matrix types.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;
