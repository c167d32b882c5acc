//! Transport configuration and playback snapshot types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default simulated track length in seconds
pub const DEFAULT_DURATION_SECS: f64 = 45.0;
/// Default tick cadence in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
/// Default position advance per tick in seconds
pub const DEFAULT_STEP_SECS: f64 = 0.5;

/// Simulated transport configuration
///
/// The defaults reproduce the demo call on the landing page: a 45 second
/// "recording" advancing half a second every 500ms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Total simulated track length (seconds)
    pub duration_secs: f64,
    /// Interval between ticks (milliseconds)
    pub tick_interval_ms: u64,
    /// Position advance applied by each tick (seconds)
    pub step_secs: f64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            step_secs: DEFAULT_STEP_SECS,
        }
    }
}

impl TransportConfig {
    /// Tick cadence as a `Duration` (never zero)
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Return a copy with non-finite or non-positive values replaced by defaults
    ///
    /// Config files are user-editable, so a zero duration or negative step
    /// must not be able to wedge the state machine.
    pub fn sanitized(self) -> Self {
        let duration_secs = if self.duration_secs.is_finite() && self.duration_secs > 0.0 {
            self.duration_secs
        } else {
            log::warn!(
                "TransportConfig: invalid duration {}, using {}",
                self.duration_secs,
                DEFAULT_DURATION_SECS
            );
            DEFAULT_DURATION_SECS
        };
        let step_secs = if self.step_secs.is_finite() && self.step_secs > 0.0 {
            self.step_secs
        } else {
            log::warn!(
                "TransportConfig: invalid step {}, using {}",
                self.step_secs,
                DEFAULT_STEP_SECS
            );
            DEFAULT_STEP_SECS
        };
        Self {
            duration_secs,
            tick_interval_ms: self.tick_interval_ms.max(1),
            step_secs,
        }
    }
}

/// Coarse transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Advancing,
}

/// Snapshot of the simulated transport
///
/// Snapshots are plain values; the progress fraction is derived on every call
/// so a renderer can never hold a stale one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Whether the simulated transport is advancing
    pub is_playing: bool,
    /// Simulated position in seconds (0 ≤ elapsed ≤ duration)
    pub elapsed: f64,
    /// Total simulated length in seconds
    pub duration: f64,
}

impl PlaybackState {
    /// Initial state for a track of `duration` seconds
    pub fn stopped(duration: f64) -> Self {
        Self {
            is_playing: false,
            elapsed: 0.0,
            duration,
        }
    }

    /// Coarse play state
    pub fn play_state(&self) -> PlayState {
        if self.is_playing {
            PlayState::Advancing
        } else {
            PlayState::Stopped
        }
    }

    /// Position as a fraction of the duration, clamped to 0.0-1.0
    pub fn progress_fraction(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Elapsed position floored to whole seconds (for clock display)
    pub fn whole_seconds(&self) -> u64 {
        self.elapsed.max(0.0).floor() as u64
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::stopped(DEFAULT_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_demo_call() {
        let config = TransportConfig::default();
        assert_eq!(config.duration_secs, 45.0);
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.step_secs, 0.5);
    }

    #[test]
    fn test_sanitized_replaces_invalid_values() {
        let config = TransportConfig {
            duration_secs: 0.0,
            tick_interval_ms: 0,
            step_secs: f64::NAN,
        }
        .sanitized();
        assert_eq!(config.duration_secs, DEFAULT_DURATION_SECS);
        assert_eq!(config.tick_interval_ms, 1);
        assert_eq!(config.step_secs, DEFAULT_STEP_SECS);
    }

    #[test]
    fn test_progress_fraction() {
        let mut state = PlaybackState::stopped(45.0);
        assert_eq!(state.progress_fraction(), 0.0);
        state.elapsed = 22.5;
        assert!((state.progress_fraction() - 0.5).abs() < f64::EPSILON);
        state.elapsed = 45.0;
        assert_eq!(state.progress_fraction(), 1.0);
    }

    #[test]
    fn test_whole_seconds_floors() {
        let state = PlaybackState {
            is_playing: true,
            elapsed: 7.5,
            duration: 45.0,
        };
        assert_eq!(state.whole_seconds(), 7);
        assert_eq!(state.play_state(), PlayState::Advancing);
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config: TransportConfig = serde_yaml::from_str("duration_secs: 30.0").unwrap();
        assert_eq!(config.duration_secs, 30.0);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(config.step_secs, DEFAULT_STEP_SECS);
    }
}
