//! Fixed-function style pipeline for the wireframe cube.
//!
//! The caller only supplies data: vertex positions, edge connectivity and
//! light positions. Placement comes from matrix commands issued each frame
//! (`load_identity`, `translate`, `rotate_degrees`), mirroring the immediate
//! mode of classic graphics APIs. The pipeline transforms each edge to clip
//! space, lights its endpoints and maps it through the viewport; the window's
//! accelerated renderer draws the resulting segments.
//!
//! Lighting uses the fixed-function defaults: a grey material, one white
//! light and a dim global ambient. Light positions are taken to be in eye
//! space, so the lights stay fixed relative to the viewer while the cube turns.

use crate::colors;
use crate::config::{
    HARDWARE_AMBIENT, HARDWARE_FOV_Y_DEGREES, HARDWARE_LIGHT_DIFFUSE, HARDWARE_LIGHT_POSITIONS,
    HARDWARE_VERTEX_NORMAL, HARDWARE_Z_FAR, HARDWARE_Z_NEAR,
};
use crate::geometry::Edge;
use crate::light::PointLight;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::rotation::RotationState;

/// A screen-space line ready for the accelerated renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: u32,
}

/// A vertex after the model-view, projection and lighting stages.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProcessedVertex {
    screen: Vec2,
    rgb: [f32; 3],
}

pub struct Pipeline {
    projection: Mat4,
    modelview: Mat4,
    viewport: (f32, f32),
    lights: Vec<PointLight>,
    ambient: f32,
    material_ambient: [f32; 3],
    material_diffuse: [f32; 3],
    normal: Vec3,
}

impl Pipeline {
    /// A pipeline with the default perspective, lights and material for a
    /// `width` × `height` viewport.
    pub fn new(width: u32, height: u32) -> Self {
        let mut pipeline = Self {
            projection: Mat4::identity(),
            modelview: Mat4::identity(),
            viewport: (width as f32, height as f32),
            lights: HARDWARE_LIGHT_POSITIONS
                .iter()
                .zip(HARDWARE_LIGHT_DIFFUSE)
                .map(|(&position, diffuse)| PointLight::new(position, diffuse))
                .collect(),
            ambient: HARDWARE_AMBIENT,
            material_ambient: colors::HARDWARE_MATERIAL_AMBIENT,
            material_diffuse: colors::HARDWARE_MATERIAL_DIFFUSE,
            normal: HARDWARE_VERTEX_NORMAL,
        };
        pipeline.perspective(
            HARDWARE_FOV_Y_DEGREES,
            width as f32 / height as f32,
            HARDWARE_Z_NEAR,
            HARDWARE_Z_FAR,
        );
        pipeline
    }

    /// Replaces the projection matrix.
    pub fn perspective(&mut self, fov_y_degrees: f32, aspect_ratio: f32, near: f32, far: f32) {
        self.projection =
            Mat4::perspective_rh_gl(fov_y_degrees.to_radians(), aspect_ratio, near, far);
    }

    pub fn load_identity(&mut self) -> &mut Self {
        self.modelview = Mat4::identity();
        self
    }

    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        self.modelview = self.modelview * Mat4::translation(offset.x, offset.y, offset.z);
        self
    }

    /// Right-multiplies a rotation of `angle` degrees about `axis`.
    pub fn rotate_degrees(&mut self, angle: f32, axis: Vec3) -> &mut Self {
        self.modelview = self.modelview * Mat4::rotation_axis(angle.to_radians(), axis);
        self
    }

    /// Identity, eye offset, then the accumulated X, Y and Z turns (degrees).
    pub fn place(&mut self, eye_offset: Vec3, rotation: &RotationState) -> &mut Self {
        self.load_identity()
            .translate(eye_offset)
            .rotate_degrees(rotation.x, Vec3::X)
            .rotate_degrees(rotation.y, Vec3::Y)
            .rotate_degrees(rotation.z, Vec3::Z)
    }

    pub fn modelview(&self) -> Mat4 {
        self.modelview
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn set_lights(&mut self, lights: Vec<PointLight>) {
        self.lights = lights;
    }

    /// Material ambient times the global ambient, plus material diffuse times
    /// the summed Lambert terms of the lights. No specular or emission.
    fn light_vertex(&self, eye_position: Vec3, normal: Vec3) -> [f32; 3] {
        let diffuse: f32 = self
            .lights
            .iter()
            .map(|light| light.intensity(eye_position, normal))
            .sum();
        [0, 1, 2].map(|i| {
            (self.material_ambient[i] * self.ambient + self.material_diffuse[i] * diffuse)
                .clamp(0.0, 1.0)
        })
    }

    /// Runs one vertex through the pipeline; `None` if it falls behind the eye.
    fn process(&self, vertex: Vec3) -> Option<ProcessedVertex> {
        let eye = (self.modelview * Vec4::point(vertex)).xyz();
        // The model-view has no scale, so it maps normals as it maps directions.
        let n = self.normal;
        let normal = (self.modelview * Vec4::new(n.x, n.y, n.z, 0.0))
            .xyz()
            .normalize();
        let ndc = (self.projection * Vec4::point(eye)).perspective_divide()?;

        let (width, height) = self.viewport;
        Some(ProcessedVertex {
            screen: Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height),
            rgb: self.light_vertex(eye, normal),
        })
    }

    /// Transforms and lights every edge.
    ///
    /// Edges with an endpoint behind the eye are dropped. Each segment takes
    /// the mean of its endpoints' lit colors.
    pub fn draw_lines(&self, vertices: &[Vec3], edges: &[Edge]) -> Vec<LineSegment> {
        let processed: Vec<Option<ProcessedVertex>> =
            vertices.iter().map(|&v| self.process(v)).collect();

        edges
            .iter()
            .filter_map(|edge| {
                let a = processed.get(edge.0).copied().flatten()?;
                let b = processed.get(edge.1).copied().flatten()?;
                let rgb = [0, 1, 2].map(|i| (a.rgb[i] + b.rgb[i]) / 2.0);
                Some(LineSegment {
                    from: a.screen,
                    to: b.screen,
                    color: colors::from_unit_rgb(rgb),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HARDWARE_EYE_OFFSET, WINDOW_HEIGHT, WINDOW_WIDTH};
    use crate::geometry::{Cube, N_NUM_EDGES};
    use approx::assert_relative_eq;

    fn placed(rotation: RotationState) -> Pipeline {
        let mut pipeline = Pipeline::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        pipeline.place(HARDWARE_EYE_OFFSET, &rotation);
        pipeline
    }

    #[test]
    fn cube_centre_lands_on_viewport_centre() {
        let pipeline = placed(RotationState::new(37.0, 81.0, 0.0));
        let centre = pipeline.process(Vec3::ZERO).unwrap();
        assert_relative_eq!(centre.screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(centre.screen.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn all_edges_visible_at_default_distance() {
        let cube = Cube::wire();
        for deg in [0.0, 45.0, 90.0, 200.0, 359.0] {
            let pipeline = placed(RotationState::new(deg, deg, 0.0));
            let lines = pipeline.draw_lines(cube.vertices(), cube.edges());
            assert_eq!(lines.len(), N_NUM_EDGES);
            for line in &lines {
                for p in [line.from, line.to] {
                    assert!(p.x > 0.0 && p.x < 800.0 && p.y > 0.0 && p.y < 600.0, "{p:?}");
                }
            }
        }
    }

    #[test]
    fn upper_corner_is_drawn_above_centre() {
        // Screen y grows downward while eye-space y grows upward.
        let pipeline = placed(RotationState::default());
        let top = pipeline.process(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert!(top.screen.y < 300.0);
    }

    #[test]
    fn edges_behind_eye_are_dropped() {
        let mut pipeline = Pipeline::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        pipeline.load_identity().translate(Vec3::new(0.0, 0.0, 0.5));
        let cube = Cube::wire();
        let lines = pipeline.draw_lines(cube.vertices(), cube.edges());
        assert!(lines.len() < N_NUM_EDGES);
    }

    #[test]
    fn out_of_range_edge_is_skipped() {
        let pipeline = placed(RotationState::default());
        let cube = Cube::wire();
        let lines = pipeline.draw_lines(cube.vertices(), &[Edge(0, 1), Edge(2, 42)]);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn lighting_stays_in_range() {
        let mut pipeline = placed(RotationState::new(10.0, 20.0, 0.0));
        pipeline.set_lights(vec![PointLight::new(Vec3::new(0.0, 0.0, 0.0), 50.0)]);
        for v in Cube::wire().vertices() {
            let rgb = pipeline.process(*v).unwrap().rgb;
            assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{rgb:?}");
        }
    }

    #[test]
    fn unlit_vertices_get_ambient_only() {
        let mut pipeline = placed(RotationState::default());
        pipeline.set_lights(Vec::new());
        let rgb = pipeline.process(Vec3::new(1.0, 1.0, 1.0)).unwrap().rgb;
        for c in rgb {
            assert_relative_eq!(c, 0.2 * HARDWARE_AMBIENT);
        }
    }

    #[test]
    fn only_the_first_light_is_lit_by_default() {
        let diffuse: Vec<f32> = Pipeline::new(WINDOW_WIDTH, WINDOW_HEIGHT)
            .lights()
            .iter()
            .map(|light| light.diffuse)
            .collect();
        assert_eq!(diffuse, vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn front_facing_vertex_is_lit_grey() {
        // Eye position (1, -1, -6) seen from the light at (2, 2, -2), with the
        // default normal still pointing down +Z.
        let pipeline = placed(RotationState::default());
        let rgb = pipeline.process(Vec3::new(1.0, -1.0, -1.0)).unwrap().rgb;
        let expected = 0.04 + 0.8 * 4.0 / 26.0_f32.sqrt();
        for c in rgb {
            assert_relative_eq!(c, expected, epsilon = 1e-5);
        }
    }

    #[test]
    fn default_lines_are_grey() {
        let cube = Cube::wire();
        let lines = placed(RotationState::default()).draw_lines(cube.vertices(), cube.edges());
        for line in lines {
            let (r, g, b) = colors::unpack_color(line.color);
            assert!(r == g && g == b, "{line:?}");
            assert!(r > colors::channel(0.04), "{line:?}");
        }
    }

    #[test]
    fn turned_away_normal_gets_ambient_only() {
        let pipeline = placed(RotationState::new(0.0, 180.0, 0.0));
        for v in Cube::wire().vertices() {
            for c in pipeline.process(*v).unwrap().rgb {
                assert_relative_eq!(c, 0.04, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn place_accumulates_commands_in_order() {
        let rotation = RotationState::new(30.0, 60.0, 0.0);
        let pipeline = placed(rotation);
        let expected = Mat4::translation(0.0, 0.0, -5.0)
            * Mat4::rotation_axis(30.0_f32.to_radians(), Vec3::X)
            * Mat4::rotation_axis(60.0_f32.to_radians(), Vec3::Y)
            * Mat4::rotation_axis(0.0, Vec3::Z);
        assert_eq!(pipeline.modelview(), expected);
        assert_eq!(pipeline.lights().len(), 3);
    }
}
