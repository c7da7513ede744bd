/// Easing curves used by the intro choreography.
///
/// `InOutCubic` paces the marker reveal, `OutCubic` the globe surface fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    OutCubic,
    InOutCubic,
}

impl Ease {
    /// Remap a normalized progress value. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 3] = [Ease::Linear, Ease::OutCubic, Ease::InOutCubic];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn in_out_cubic_is_symmetric_at_midpoint() {
        assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
    }

    #[test]
    fn monotonic_on_unit_interval() {
        for ease in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = ease.apply(f64::from(step) / 100.0);
                assert!(v >= prev, "{ease:?} decreased at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(7.5), 1.0);
        }
    }
}
