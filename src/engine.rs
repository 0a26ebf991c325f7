//! Software rendering engine.
//!
//! The [`Engine`] turns a [`RotationState`] into a frame in two steps:
//! [`Engine::prepare`] does the maths (rotate, project, pick and shade the
//! visible face) and returns a [`FrameGeometry`]; [`Engine::render`] draws that
//! geometry into the color buffer. Nothing carries over between frames except
//! what the caller passes in.

use log::warn;

use crate::colors;
use crate::config::{CHANNEL_LIGHTS, RASTERIZER};
use crate::geometry::{Cube, Edge, Face, N_NUM_VERTICES};
use crate::light::{face_normal, shade_face, DirectionalLight};
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::projection::Projection;
use crate::render::{RasterizerDispatcher, RasterizerType, Renderer};
use crate::rotation::RotationState;
use crate::visibility::visible_faces;

/// A face ready to fill: its indices, approximate normal and shaded color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedFace {
    pub face: Face,
    pub normal: Vec3,
    pub color: u32,
}

/// Everything the render step needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGeometry {
    pub rotated: [Vec3; N_NUM_VERTICES],
    pub projected: [Vec2; N_NUM_VERTICES],
    pub faces: Vec<ShadedFace>,
}

impl FrameGeometry {
    /// Screen-space corners of a face, in face order.
    pub fn face_points(&self, face: &Face) -> [Vec2; 4] {
        face.indices().map(|i| self.projected[i])
    }

    /// Screen-space endpoints of an edge.
    pub fn edge_points(&self, edge: &Edge) -> [Vec2; 2] {
        edge.indices().map(|i| self.projected[i])
    }
}

pub struct Engine {
    renderer: Renderer,
    rasterizer: RasterizerDispatcher,
    projection: Projection,
    lights: [DirectionalLight; 3],
    cube: Cube,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            renderer: Renderer::new(width, height),
            rasterizer: RasterizerDispatcher::new(RASTERIZER),
            projection: Projection::new(width, height),
            lights: CHANNEL_LIGHTS.map(DirectionalLight::new),
            cube: Cube::unit(),
        }
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Color of the pixel at (x, y) in the last rendered frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.renderer.pixel(x, y)
    }

    /// Rotates, projects and shades the cube for `state`.
    pub fn prepare(&self, state: &RotationState) -> FrameGeometry {
        let rotated = self.cube.vertices().map(|v| state.apply(v));

        if let Some(v) = rotated.iter().find(|&&v| !self.projection.is_in_front(v)) {
            warn!(
                "vertex {:?} is at or behind the camera plane (d = {}); projection is unbounded",
                v,
                self.projection.camera_distance()
            );
        }

        let projected = rotated.map(|v| self.projection.project(v));

        let faces = visible_faces(state)
            .into_iter()
            .map(|face| {
                let normal = face_normal(&rotated, &face);
                ShadedFace {
                    face,
                    normal,
                    color: shade_face(normal, &self.lights),
                }
            })
            .collect();

        FrameGeometry {
            rotated,
            projected,
            faces,
        }
    }

    /// Draws a prepared frame: background, filled faces, then white edges.
    pub fn render(&mut self, frame: &FrameGeometry) {
        self.renderer.clear(colors::BACKGROUND);

        for shaded in &frame.faces {
            let points = frame.face_points(&shaded.face);
            self.renderer
                .fill_polygon(&points, shaded.color, &self.rasterizer);
        }

        for edge in self.cube.edges() {
            let [from, to] = frame.edge_points(edge);
            self.renderer.draw_line(from, to, colors::WIREFRAME);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
    use crate::geometry::{FRONT_FACE, SIDE_FACE, TOP_FACE};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn engine() -> Engine {
        Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    #[test]
    fn initial_frame_shows_black_front_face() {
        let frame = engine().prepare(&RotationState::default());
        assert_eq!(frame.faces.len(), 1);
        assert_eq!(frame.faces[0].face, FRONT_FACE);
        assert_eq!(frame.faces[0].color, colors::BLACK);
        assert_eq!(frame.rotated, *Cube::unit().vertices());
    }

    #[test]
    fn quarter_turn_shows_side_face_lit_red() {
        let frame = engine().prepare(&RotationState::new(0.0, FRAC_PI_2, 0.0));
        let shaded = frame.faces[0];
        assert_eq!(shaded.face, SIDE_FACE);
        // The +Z face swings round to +X.
        assert_relative_eq!(shaded.normal, Vec3::X, epsilon = 1e-6);
        let (r, g, b) = colors::unpack_color(shaded.color);
        assert!(r >= 254, "red {r}");
        assert_eq!((g, b), (0, 0));
    }

    #[test]
    fn half_turn_shows_top_face() {
        let frame = engine().prepare(&RotationState::new(0.0, 3.0, 0.0));
        assert_eq!(frame.faces[0].face, TOP_FACE);
    }

    #[test]
    fn projected_corners_match_projection() {
        let e = engine();
        let state = RotationState::new(0.3, 0.6, 0.9);
        let frame = e.prepare(&state);
        let proj = Projection::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        for (i, v) in e.cube().vertices().iter().enumerate() {
            assert_eq!(frame.projected[i], proj.project(state.apply(*v)));
        }
    }

    #[test]
    fn prepare_is_deterministic() {
        let e = engine();
        let state = RotationState::new(1.7, 3.4, 5.1);
        assert_eq!(e.prepare(&state), e.prepare(&state));
    }

    #[test]
    fn render_draws_face_and_white_edges() {
        let mut e = engine();
        let frame = e.prepare(&RotationState::new(0.0, FRAC_PI_2, 0.0));
        e.render(&frame);

        // Centre of the side face sits at the projected +X face centre.
        let centre = Projection::new(WINDOW_WIDTH, WINDOW_HEIGHT).project(Vec3::X);
        assert_eq!(
            e.pixel(centre.x as i32, centre.y as i32),
            Some(frame.faces[0].color)
        );

        let [a, _] = frame.edge_points(&e.cube().edges()[0]);
        assert_eq!(e.pixel(a.x as i32, a.y as i32), Some(colors::WIREFRAME));
        assert_eq!(e.pixel(0, 0), Some(colors::BACKGROUND));
        assert_eq!(e.frame_buffer().len(), (WINDOW_WIDTH * WINDOW_HEIGHT * 4) as usize);
    }

    #[test]
    fn both_rasterizers_produce_a_visible_face() {
        let mut e = engine();
        let frame = e.prepare(&RotationState::new(0.0, FRAC_PI_2, 0.0));
        let centre = Projection::new(WINDOW_WIDTH, WINDOW_HEIGHT).project(Vec3::X);
        for kind in [RasterizerType::Scanline, RasterizerType::EdgeFunction] {
            e.set_rasterizer(kind);
            assert_eq!(e.rasterizer(), kind);
            e.render(&frame);
            assert_eq!(
                e.pixel(centre.x as i32, centre.y as i32),
                Some(frame.faces[0].color),
                "{kind}"
            );
        }
    }
}
