//! Easing curves for reveal animations

use serde::{Deserialize, Serialize};

/// Timing curve applied to a linear 0.0-1.0 progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutQuad,
}

impl Easing {
    /// Map linear progress `t` (clamped to 0.0-1.0) onto the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutQuad];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?}", easing);
        }
    }

    #[test]
    fn test_clamps_out_of_range() {
        for easing in ALL {
            assert_eq!(easing.apply(-1.0), 0.0);
            assert!((easing.apply(2.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_out_cubic_front_loaded() {
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
        assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 0..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= last - 1e-6, "{:?} not monotonic at {}", easing, step);
                last = value;
            }
        }
    }
}
