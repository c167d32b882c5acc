//! Pure transport state machine
//!
//! `Transport` holds the playback state and applies `toggle` and `tick`
//! transitions. It owns no timer: whoever drives it decides when ticks fire.
//! The iced host drives it from a subscription, `TransportController`
//! drives it from a tokio task.

use super::state::{PlaybackState, TransportConfig};

/// Outcome of a transport transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportEvent {
    /// Stopped → Advancing (a tick timer must be scheduled)
    Started,
    /// Advancing → Stopped by the user, position kept
    Paused,
    /// A tick moved the position forward
    Advanced,
    /// A tick hit the end: position reset to 0 and transport stopped
    Completed,
    /// A tick arrived while stopped and was discarded
    Ignored,
}

impl TransportEvent {
    /// Whether this transition left the transport stopped (the tick timer must go)
    pub fn stops_timer(self) -> bool {
        matches!(self, Self::Paused | Self::Completed)
    }
}

/// Simulated transport state machine
#[derive(Debug, Clone)]
pub struct Transport {
    config: TransportConfig,
    state: PlaybackState,
}

impl Transport {
    /// Create a stopped transport at position 0
    pub fn new(config: TransportConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            state: PlaybackState::stopped(config.duration_secs),
        }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Read-only snapshot of the current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Flip between Stopped and Advancing
    ///
    /// Pausing keeps the current position; only completion rewinds.
    pub fn toggle(&mut self) -> TransportEvent {
        self.state.is_playing = !self.state.is_playing;
        if self.state.is_playing {
            log::debug!("transport: start at {:.1}s", self.state.elapsed);
            TransportEvent::Started
        } else {
            log::debug!("transport: pause at {:.1}s", self.state.elapsed);
            TransportEvent::Paused
        }
    }

    /// Apply one tick
    ///
    /// A tick that would reach or pass the duration stops the transport and
    /// rewinds to 0 in the same step, so `elapsed == duration` is never
    /// observable while playing.
    pub fn tick(&mut self) -> TransportEvent {
        if !self.state.is_playing {
            return TransportEvent::Ignored;
        }

        let next = self.state.elapsed + self.config.step_secs;
        if next >= self.state.duration {
            self.state.is_playing = false;
            self.state.elapsed = 0.0;
            log::debug!("transport: reached {:.1}s, rewound", self.state.duration);
            TransportEvent::Completed
        } else {
            self.state.elapsed = next;
            TransportEvent::Advanced
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}
