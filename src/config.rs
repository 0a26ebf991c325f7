//! Compiled-in configuration.
//!
//! There is no runtime configuration surface; every tunable lives here as a
//! named constant.

use std::f32::consts::{FRAC_PI_4, PI};

use crate::math::vec3::Vec3;
use crate::render::RasterizerType;
use crate::rotation::RotationStep;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

pub const SOFTWARE_TITLE: &str = "Rotating Cube with Light Sources";
pub const HARDWARE_TITLE: &str = "Wireframe Cube";

/// Target frame rate of the software renderer.
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

/// Fixed wait after each hardware-path frame, in milliseconds.
pub const HARDWARE_FRAME_DELAY_MS: u64 = 10;

/// Distance added to every vertex depth before the perspective divide.
///
/// Valid range: strictly greater than the cube's bounding radius (√3 for the
/// unit cube), otherwise a rotated corner can reach `z <= -d` where the
/// divide inverts or blows up.
pub const CAMERA_DISTANCE: f32 = 4.0;

/// Upper bound (exclusive) of the front-face band of `angle_y mod 2π`.
///
/// Valid range: `(0, SIDE_BAND_END)`.
pub const FRONT_BAND_END: f32 = FRAC_PI_4;

/// Upper bound (exclusive) of the side-face band; the side band starts just
/// above [`FRONT_BAND_END`]. Everything past it falls into the top band.
///
/// Valid range: `(FRONT_BAND_END, 2π)`.
pub const SIDE_BAND_END: f32 = 3.0 * PI / 4.0;

/// Per-frame angle increments of the software renderer, in radians.
pub const SOFTWARE_ROTATION_STEP: RotationStep = RotationStep::new(0.01, 0.02, 0.03);

/// Per-frame angle increments of the hardware pipeline, in degrees.
///
/// Only X and Y spin; the Z axis is left alone.
pub const HARDWARE_ROTATION_STEP_DEGREES: RotationStep = RotationStep::new(1.0, 1.0, 0.0);

/// Directions of the three channel lights: red, green, blue.
pub const CHANNEL_LIGHTS: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// Vertical field of view of the hardware pipeline, in degrees.
pub const HARDWARE_FOV_Y_DEGREES: f32 = 45.0;
pub const HARDWARE_Z_NEAR: f32 = 0.1;
pub const HARDWARE_Z_FAR: f32 = 50.0;

/// Eye-space offset applied before the cube is rotated.
pub const HARDWARE_EYE_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -5.0);

/// Point-light positions of the hardware pipeline, in eye space.
pub const HARDWARE_LIGHT_POSITIONS: [Vec3; 3] = [
    Vec3::new(2.0, 2.0, -2.0),
    Vec3::new(-2.0, 2.0, -2.0),
    Vec3::new(0.0, 0.0, 2.0),
];

/// Diffuse strength of each hardware light. Fixed-function defaults: light 0
/// is white, the others contribute nothing until configured.
pub const HARDWARE_LIGHT_DIFFUSE: [f32; 3] = [1.0, 0.0, 0.0];

/// Global ambient light of the hardware pipeline.
pub const HARDWARE_AMBIENT: f32 = 0.2;

/// Model-space normal carried by every wireframe vertex, the fixed-function
/// default when no normal is specified.
pub const HARDWARE_VERTEX_NORMAL: Vec3 = Vec3::Z;

/// Triangle fill algorithm used by the software renderer.
pub const RASTERIZER: RasterizerType = RasterizerType::Scanline;

/// Interval between FPS reports in the log, in milliseconds.
pub const FPS_REPORT_INTERVAL_MS: u64 = 1000;
