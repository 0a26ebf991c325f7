//! Single-face visibility heuristic.
//!
//! Exactly one face is drawn each frame, picked from the Y angle alone. This
//! is not backface culling: X and Z rotations are ignored and the chosen face
//! need not actually face the viewer.

use std::f32::consts::TAU;
use std::fmt;

use crate::config::{FRONT_BAND_END, SIDE_BAND_END};
use crate::geometry::{Face, FRONT_FACE, SIDE_FACE, TOP_FACE};
use crate::rotation::RotationState;

/// Angular band of `angle_y mod 2π`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceBand {
    /// `[0, FRONT_BAND_END)`
    Front,
    /// `(FRONT_BAND_END, SIDE_BAND_END)`
    Side,
    /// Everything else, including the `FRONT_BAND_END` boundary itself.
    Top,
}

impl FaceBand {
    pub fn face(self) -> Face {
        match self {
            FaceBand::Front => FRONT_FACE,
            FaceBand::Side => SIDE_FACE,
            FaceBand::Top => TOP_FACE,
        }
    }
}

impl fmt::Display for FaceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceBand::Front => write!(f, "front"),
            FaceBand::Side => write!(f, "side"),
            FaceBand::Top => write!(f, "top"),
        }
    }
}

/// Picks the band for a Y rotation angle in radians (any value, any sign).
pub fn select_band(angle_y: f32) -> FaceBand {
    let a = angle_y.rem_euclid(TAU);
    if a < FRONT_BAND_END {
        FaceBand::Front
    } else if FRONT_BAND_END < a && a < SIDE_BAND_END {
        FaceBand::Side
    } else {
        FaceBand::Top
    }
}

/// Faces to draw this frame; always a single face.
pub fn visible_faces(state: &RotationState) -> Vec<Face> {
    vec![select_band(state.y).face()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn bands_at_reference_angles() {
        assert_eq!(select_band(0.0), FaceBand::Front);
        assert_eq!(select_band(0.5), FaceBand::Front);
        assert_eq!(select_band(FRAC_PI_2), FaceBand::Side);
        assert_eq!(select_band(PI), FaceBand::Top);
        assert_eq!(select_band(3.0 * FRAC_PI_2), FaceBand::Top);
    }

    #[test]
    fn lower_boundary_of_side_band_falls_to_top() {
        assert_eq!(select_band(FRAC_PI_4), FaceBand::Top);
        assert_eq!(select_band(SIDE_BAND_END), FaceBand::Top);
    }

    #[test]
    fn angle_is_taken_modulo_full_turn() {
        assert_eq!(select_band(TAU + 0.1), FaceBand::Front);
        assert_eq!(select_band(10.0 * TAU + FRAC_PI_2), FaceBand::Side);
        // -0.1 wraps to just under 2π
        assert_eq!(select_band(-0.1), FaceBand::Top);
    }

    #[test]
    fn bands_cover_the_circle_without_overlap() {
        let steps = 10_000;
        let mut seen = std::collections::HashSet::new();
        for i in 0..steps {
            let a = TAU * i as f32 / steps as f32;
            let band = select_band(a);
            let in_front = a < FRONT_BAND_END;
            let in_side = FRONT_BAND_END < a && a < SIDE_BAND_END;
            let expected = match (in_front, in_side) {
                (true, false) => FaceBand::Front,
                (false, true) => FaceBand::Side,
                (false, false) => FaceBand::Top,
                (true, true) => unreachable!("front and side bands overlap at {a}"),
            };
            assert_eq!(band, expected, "angle {a}");
            seen.insert(band);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn exactly_one_face_is_visible() {
        for y in [0.0, 1.0, 2.0, 4.0, -3.0] {
            let faces = visible_faces(&RotationState::new(5.0, y, -2.0));
            assert_eq!(faces.len(), 1);
            assert_eq!(faces[0], select_band(y).face());
        }
    }

    #[test]
    fn x_and_z_angles_do_not_matter() {
        let a = visible_faces(&RotationState::new(0.0, 1.0, 0.0));
        let b = visible_faces(&RotationState::new(3.0, 1.0, -9.0));
        assert_eq!(a, b);
    }
}
