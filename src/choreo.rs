use glam::DVec3;

use crate::{
    camera::{CameraAngles, OrbitControls},
    clock::IntroClock,
    ease::Ease,
    error::{SpheruleError, SpheruleResult},
    geo::{self, GeoPoint, MapSize},
};

/// Scene-graph handle for the globe: the live marker positions and the
/// surface material opacity. The choreographer writes both, never reads.
pub trait GlobeStage {
    fn marker_positions(&mut self) -> &mut [DVec3];
    fn set_surface_opacity(&mut self, opacity: f64);
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct IntroConfig {
    /// Half-extents of the source map image (see [`MapSize`]).
    pub map: MapSize,
    pub globe_radius: f64,
    /// Resting opacity of the globe surface once the fade finishes.
    pub max_globe_alpha: f64,
    /// Frame budget of the marker reveal.
    pub dots_total: u64,
    /// Frame budget of the surface fade.
    pub globe_total: u64,
    pub camera: CameraAngles,
}

impl IntroConfig {
    pub fn new(map: MapSize, globe_radius: f64) -> Self {
        Self {
            map,
            globe_radius,
            max_globe_alpha: 0.7,
            dots_total: 170,
            globe_total: 80,
            camera: CameraAngles::default(),
        }
    }

    pub fn validate(&self) -> SpheruleResult<()> {
        if self.map.width <= 0.0 || self.map.height <= 0.0 {
            return Err(SpheruleError::validation("map half-extents must be > 0"));
        }
        if self.globe_radius <= 0.0 {
            return Err(SpheruleError::validation("globe radius must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.max_globe_alpha) {
            return Err(SpheruleError::validation(
                "max globe alpha must be within [0, 1]",
            ));
        }
        if self.dots_total == 0 || self.globe_total == 0 {
            return Err(SpheruleError::validation("phase totals must be > 0"));
        }
        Ok(())
    }
}

/// One globe intro session: precomputed sphere targets plus the phase clock,
/// driven by the host render loop through [`Intro::tick`].
///
/// All state is owned here; multiple sessions can run side by side.
pub struct Intro {
    config: IntroConfig,
    clock: IntroClock,
    targets: Vec<DVec3>,
    on_initialized: Option<Box<dyn FnMut()>>,
}

impl Intro {
    /// The marker whose unstaggered reveal progress also drives the camera
    /// settle. An explicit contract, not an accident of loop order.
    pub const REFERENCE_MARKER: usize = 0;

    /// How far through the marker reveal the surface fade starts, so the two
    /// stages overlap instead of running back to back.
    pub const GLOBE_FADE_OVERLAP: f64 = 0.65;

    #[tracing::instrument(skip(points))]
    pub fn new(config: IntroConfig, points: &[GeoPoint]) -> SpheruleResult<Self> {
        config.validate()?;
        let targets = points
            .iter()
            .map(|&p| geo::project(p, config.map, config.globe_radius))
            .collect::<Vec<_>>();
        tracing::debug!(targets = targets.len(), "projected marker targets");
        Ok(Self {
            clock: IntroClock::new(config.dots_total, config.globe_total),
            config,
            targets,
            on_initialized: None,
        })
    }

    /// Install the callback fired from `tick` while the marker reveal is
    /// running. It fires on EVERY such tick, not once; callers wanting
    /// one-shot semantics must debounce on their side.
    pub fn set_initialized_callback(&mut self, callback: impl FnMut() + 'static) {
        self.on_initialized = Some(Box::new(callback));
    }

    pub fn targets(&self) -> &[DVec3] {
        &self.targets
    }

    pub fn is_settled(&self) -> bool {
        self.clock.dots.is_complete() && self.clock.globe.is_complete()
    }

    pub fn clock(&self) -> &IntroClock {
        &self.clock
    }

    /// Advance the choreography by one frame. Called by the host render loop
    /// at most once per rendered frame; never blocks.
    pub fn tick(&mut self, stage: &mut impl GlobeStage, controls: &mut impl OrbitControls) {
        if !self.clock.dots.is_complete() {
            let positions = stage.marker_positions();
            let count = positions.len();

            // Targets can lag the live marker set while the dataset is still
            // loading; leave the counter untouched and retry next tick.
            if self.targets.len() < count {
                return;
            }

            let base = self.clock.dots.progress(Ease::InOutCubic);
            for (i, position) in positions.iter_mut().enumerate() {
                // Later markers lag proportionally to their index, giving a
                // cascading reveal rather than simultaneous motion.
                let staggered = (base + base * (i as f64 / count as f64)).min(1.0);
                *position = self.targets[i] * staggered;

                if i == Self::REFERENCE_MARKER {
                    controls.set_azimuthal_angle(self.config.camera.azimuthal.at(base));
                    controls.set_polar_angle(self.config.camera.polar.at(base));
                }
            }
            controls.update();

            self.clock.dots.advance();
            if self.clock.dots.is_complete() {
                tracing::debug!("marker reveal complete");
            }

            if let Some(callback) = &mut self.on_initialized {
                callback();
            }
        }

        let dots = self.clock.dots;
        if dots.current as f64 >= dots.total as f64 * Self::GLOBE_FADE_OVERLAP
            && !self.clock.globe.is_complete()
        {
            let fade = self.clock.globe.progress(Ease::OutCubic);
            stage.set_surface_opacity(self.config.max_globe_alpha * fade);
            self.clock.globe.advance();
            if self.clock.globe.is_complete() {
                tracing::debug!("globe fade complete");
            }
        }
    }

    /// Teardown between ticks: zero both phase counters and drop the cached
    /// targets so a subsequent setup starts the choreography from scratch.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.targets.clear();
    }
}
