//! Animate-on-scroll ("reveal") support
//!
//! Page elements fade or slide in when they scroll into view. The page only
//! talks to the animation engine through the narrow [`ScrollAnimator`]
//! capability (`init` once at page load, `refresh` after layout changes), so
//! the engine can be swapped or stubbed without touching the page.
//!
//! [`RevealTracker`] is the engine used by the site.

mod easing;
mod tracker;

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use easing::Easing;
pub use tracker::{RevealId, RevealPhase, RevealTarget, RevealTracker};

/// Distance (pixels) an element travels while sliding in
pub const TRAVEL_PX: f32 = 40.0;

/// Engine configuration, applied once at page load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Animation length in milliseconds
    pub duration_ms: u64,
    pub easing: Easing,
    /// Reveal only the first time an element comes into view
    pub once: bool,
    /// Also hide elements again when they scroll out through the top
    pub mirror: bool,
    /// How far (pixels) past the bottom edge an element must be before it reveals
    pub offset_px: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            easing: Easing::EaseOutCubic,
            once: false,
            mirror: false,
            offset_px: 100.0,
        }
    }
}

impl RevealConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Entrance style of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Animation {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    ZoomIn,
    FlipUp,
}

impl Animation {
    /// Offset (x, y) in pixels at the given eased progress
    ///
    /// `FadeLeft` enters from the right edge moving left, `FadeRight` the
    /// opposite, mirroring the usual animate-on-scroll naming.
    pub fn translation(self, progress: f32) -> (f32, f32) {
        let remaining = (1.0 - progress.clamp(0.0, 1.0)) * TRAVEL_PX;
        match self {
            Animation::FadeUp | Animation::FlipUp => (0.0, remaining),
            Animation::FadeLeft => (remaining, 0.0),
            Animation::FadeRight => (-remaining, 0.0),
            Animation::ZoomIn => (0.0, 0.0),
        }
    }

    /// Scale factor at the given eased progress (only `ZoomIn` scales)
    pub fn scale(self, progress: f32) -> f32 {
        match self {
            Animation::ZoomIn => 1.0 - 0.4 * (1.0 - progress.clamp(0.0, 1.0)),
            _ => 1.0,
        }
    }
}

/// Capability interface of an animate-on-scroll engine
pub trait ScrollAnimator {
    /// Configure the engine and evaluate every registered element
    fn init(&mut self, config: &RevealConfig);

    /// Re-evaluate element visibility (after a resize or content change)
    fn refresh(&mut self);
}

/// Page-load routine: hand the fixed configuration to the animator
pub fn page_load(animator: &mut dyn ScrollAnimator, config: &RevealConfig) {
    log::info!(
        "page_load: reveal animations {}ms {:?}, once={}, mirror={}, offset={}px",
        config.duration_ms,
        config.easing,
        config.once,
        config.mirror,
        config.offset_px
    );
    animator.init(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingAnimator {
        inits: Vec<RevealConfig>,
        refreshes: usize,
    }

    impl ScrollAnimator for RecordingAnimator {
        fn init(&mut self, config: &RevealConfig) {
            self.inits.push(*config);
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    #[test]
    fn test_default_config() {
        let config = RevealConfig::default();
        assert_eq!(config.duration(), Duration::from_millis(800));
        assert_eq!(config.easing, Easing::EaseOutCubic);
        assert!(!config.once);
        assert!(!config.mirror);
        assert_eq!(config.offset_px, 100.0);
    }

    #[test]
    fn test_page_load_inits_once() {
        let mut animator = RecordingAnimator::default();
        page_load(&mut animator, &RevealConfig::default());
        assert_eq!(animator.inits, vec![RevealConfig::default()]);
        assert_eq!(animator.refreshes, 0);
    }

    #[test]
    fn test_translation_settles_at_zero() {
        for animation in [
            Animation::FadeUp,
            Animation::FadeLeft,
            Animation::FadeRight,
            Animation::ZoomIn,
            Animation::FlipUp,
        ] {
            assert_eq!(animation.translation(1.0), (0.0, 0.0));
            assert_eq!(animation.scale(1.0), 1.0);
        }
        assert_eq!(Animation::FadeUp.translation(0.0), (0.0, TRAVEL_PX));
        assert_eq!(Animation::FadeRight.translation(0.0), (-TRAVEL_PX, 0.0));
    }

    #[test]
    fn test_easing_yaml_names() {
        let config: RevealConfig = serde_yaml::from_str("easing: ease-in-out-quad\nonce: true").unwrap();
        assert_eq!(config.easing, Easing::EaseInOutQuad);
        assert!(config.once);
        assert_eq!(config.duration_ms, 800);
    }
}
