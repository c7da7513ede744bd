use crate::ease::Ease;

/// Frame counter for one named stage of the intro animation.
///
/// A phase is complete once `current > total`; `advance` is inert from then
/// on, so `current` never grows past `total + 1`.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Phase {
    pub current: u64,
    pub total: u64,
}

impl Phase {
    /// `total` must be at least 1; a zero budget would make `progress`
    /// divide by zero.
    pub fn new(total: u64) -> Self {
        debug_assert!(total > 0, "phase frame budget must be > 0");
        Self { current: 0, total }
    }

    pub fn advance(&mut self) {
        if !self.is_complete() {
            self.current += 1;
        }
    }

    pub fn is_complete(self) -> bool {
        self.current > self.total
    }

    /// Eased progress in `[0, 1]`, clamped no matter how far `current` ran.
    pub fn progress(self, ease: Ease) -> f64 {
        let t = self.current as f64 / self.total as f64;
        ease.apply(t).min(1.0)
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// The two stages of the intro: marker reveal (`dots`) then surface fade
/// (`globe`). Each has its own frame budget and advances independently.
#[derive(Clone, Copy, Debug)]
pub struct IntroClock {
    pub dots: Phase,
    pub globe: Phase,
}

impl IntroClock {
    pub fn new(dots_total: u64, globe_total: u64) -> Self {
        Self {
            dots: Phase::new(dots_total),
            globe: Phase::new(globe_total),
        }
    }

    pub fn reset(&mut self) {
        self.dots.reset();
        self.globe.reset();
    }
}
