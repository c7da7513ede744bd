/// Orbital camera control surface owned by the rendering collaborator.
///
/// The choreographer writes angles through this every tick while the marker
/// reveal is active; it never reads them back.
pub trait OrbitControls {
    fn set_azimuthal_angle(&mut self, radians: f64);
    fn set_polar_angle(&mut self, radians: f64);
    fn update(&mut self);
}

/// Start and resting value for one camera angle, fixed at setup.
///
/// Neither field is mutated after construction; the applied angle is
/// recomputed from `angle_at` every frame rather than accumulated.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct AngleSweep {
    pub current: f64,
    pub target: f64,
}

impl AngleSweep {
    pub fn new(current: f64, target: f64) -> Self {
        Self { current, target }
    }

    pub fn at(self, progress: f64) -> f64 {
        angle_at(progress, self.current, self.target)
    }
}

/// The azimuthal/polar sweep pair for the intro camera settle.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CameraAngles {
    pub azimuthal: AngleSweep,
    pub polar: AngleSweep,
}

impl Default for CameraAngles {
    /// The animation-start pose: azimuthal flipped half a turn and polar far
    /// out of range, settling to the front-facing rest pose.
    fn default() -> Self {
        Self {
            azimuthal: AngleSweep::new(-std::f64::consts::PI, 0.0),
            polar: AngleSweep::new(180.0, 0.0),
        }
    }
}

/// Linear blend from `current` toward `target`.
///
/// Progress is expected to already be eased by the caller; this stays linear
/// so the same curve drives markers and camera in lockstep.
pub fn angle_at(progress: f64, current: f64, target: f64) -> f64 {
    current - (current - target) * progress
}

/// Azimuthal angle of the idle drift applied by the host loop once the intro
/// has settled, as a function of wall-clock milliseconds.
pub fn ambient_azimuthal(now_ms: f64) -> f64 {
    (now_ms * 0.000_000_5).cos() * -360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_current_and_target() {
        assert_eq!(angle_at(0.0, -3.0, 1.5), -3.0);
        assert_eq!(angle_at(1.0, -3.0, 1.5), 1.5);
    }

    #[test]
    fn blend_is_linear_in_progress() {
        assert_eq!(angle_at(0.5, 2.0, 4.0), 3.0);
        assert_eq!(angle_at(0.25, 0.0, 8.0), 2.0);
    }

    #[test]
    fn sweep_at_matches_free_function() {
        let sweep = AngleSweep::new(-std::f64::consts::PI, 0.0);
        assert_eq!(sweep.at(0.75), angle_at(0.75, sweep.current, sweep.target));
    }

    #[test]
    fn ambient_drift_stays_bounded() {
        for ms in [0.0, 1e3, 1e6, 1e9] {
            let a = ambient_azimuthal(ms);
            assert!((-360.0..=360.0).contains(&a));
        }
    }
}
