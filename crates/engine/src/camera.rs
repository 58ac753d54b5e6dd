//! Camera heading quantization.
//!
//! A free-orbiting camera looks along an arbitrary horizontal direction. Input is
//! resolved against the nearest world axis: the dominant component of the direction
//! picks one of two bands (x or z), its sign picks which way is forward.

use crate::types::{CameraHeading, GameAction, Turn};

/// Heading for a horizontal view direction `(x, z)`
///
/// Ties between the axes resolve to the z band, as does a zero vector (which yields the
/// default heading).
pub fn heading_from_direction(x: f32, z: f32) -> CameraHeading {
    if !x.is_finite() || !z.is_finite() {
        return CameraHeading::default();
    }
    if x.abs() > z.abs() {
        if x > 0.0 {
            CameraHeading::PosX
        } else {
            CameraHeading::NegX
        }
    } else if z > 0.0 {
        CameraHeading::PosZ
    } else {
        CameraHeading::NegZ
    }
}

/// Heading for an azimuth in radians, measured from -z toward +x
pub fn heading_from_azimuth(radians: f32) -> CameraHeading {
    heading_from_direction(radians.sin(), -radians.cos())
}

/// Planar step for a move action seen from `heading`
pub fn resolve_move(action: GameAction, heading: CameraHeading) -> Option<(i8, i8)> {
    heading.resolve(action)
}

/// Tracks the camera heading for a frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    heading: CameraHeading,
}

impl Camera {
    pub fn new(heading: CameraHeading) -> Self {
        Self { heading }
    }

    pub fn heading(&self) -> CameraHeading {
        self.heading
    }

    pub fn turn(&mut self, turn: Turn) -> CameraHeading {
        self.heading = self.heading.turned(turn);
        log::debug!("camera heading {}", self.heading.as_str());
        self.heading
    }

    /// Re-quantize from a view direction; returns true when the band changed
    pub fn look_along(&mut self, x: f32, z: f32) -> bool {
        let heading = heading_from_direction(x, z);
        let changed = heading != self.heading;
        self.heading = heading;
        changed
    }

    pub fn reset(&mut self) {
        self.heading = CameraHeading::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn direction_bands() {
        assert_eq!(heading_from_direction(0.0, -1.0), CameraHeading::NegZ);
        assert_eq!(heading_from_direction(0.2, -0.9), CameraHeading::NegZ);
        assert_eq!(heading_from_direction(0.9, -0.2), CameraHeading::PosX);
        assert_eq!(heading_from_direction(-0.9, 0.5), CameraHeading::NegX);
        assert_eq!(heading_from_direction(0.1, 0.8), CameraHeading::PosZ);
    }

    #[test]
    fn degenerate_directions_use_default() {
        assert_eq!(heading_from_direction(0.0, 0.0), CameraHeading::NegZ);
        assert_eq!(heading_from_direction(f32::NAN, 1.0), CameraHeading::NegZ);
    }

    #[test]
    fn diagonal_ties_go_to_z_band() {
        assert_eq!(heading_from_direction(1.0, 1.0), CameraHeading::PosZ);
        assert_eq!(heading_from_direction(-1.0, -1.0), CameraHeading::NegZ);
    }

    #[test]
    fn azimuth_bands() {
        assert_eq!(heading_from_azimuth(0.0), CameraHeading::NegZ);
        assert_eq!(heading_from_azimuth(FRAC_PI_2), CameraHeading::PosX);
        assert_eq!(heading_from_azimuth(PI), CameraHeading::PosZ);
        assert_eq!(heading_from_azimuth(-FRAC_PI_2), CameraHeading::NegX);
        // Just short of the 45 degree boundary stays in the starting band.
        assert_eq!(heading_from_azimuth(FRAC_PI_4 - 0.01), CameraHeading::NegZ);
        assert_eq!(heading_from_azimuth(FRAC_PI_4 + 0.01), CameraHeading::PosX);
    }

    #[test]
    fn moves_follow_the_camera() {
        // Looking along +x, forward is +x and right is +z.
        let h = CameraHeading::PosX;
        assert_eq!(resolve_move(GameAction::MoveForward, h), Some((1, 0)));
        assert_eq!(resolve_move(GameAction::MoveRight, h), Some((0, 1)));
        assert_eq!(resolve_move(GameAction::MoveLeft, h), Some((0, -1)));
        assert_eq!(resolve_move(GameAction::RotateX, h), None);
    }

    #[test]
    fn camera_turns_and_requantizes() {
        let mut cam = Camera::default();
        assert_eq!(cam.turn(Turn::Right), CameraHeading::PosX);
        assert_eq!(cam.turn(Turn::Left), CameraHeading::NegZ);

        assert!(cam.look_along(-1.0, 0.1));
        assert_eq!(cam.heading(), CameraHeading::NegX);
        assert!(!cam.look_along(-0.7, 0.3));

        cam.reset();
        assert_eq!(cam.heading(), CameraHeading::NegZ);
    }
}
