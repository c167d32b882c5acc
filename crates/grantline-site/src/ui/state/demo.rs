//! Demo player state: the transport plus its decorative waveform

use std::time::Instant;

use grantline_core::transport::{PlaybackState, Transport, TransportConfig, TransportEvent};
use grantline_widgets::DemoPlayerState;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns the simulated transport for the demo section
///
/// Ticks come from the host's timer subscription, which only exists while
/// the transport is advancing. Each play session has its own generation;
/// a tick stamped with an older generation (queued before a pause) is
/// discarded.
#[derive(Debug)]
pub struct DemoState {
    transport: Transport,
    player: DemoPlayerState,
    rng: StdRng,
    generation: u64,
    last_frame: Option<Instant>,
}

impl DemoState {
    pub fn new(config: TransportConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: TransportConfig, mut rng: StdRng) -> Self {
        Self {
            transport: Transport::new(config),
            player: DemoPlayerState::with_rng(&mut rng),
            rng,
            generation: 0,
            last_frame: None,
        }
    }

    pub fn playback(&self) -> PlaybackState {
        self.transport.state()
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    pub fn config(&self) -> &TransportConfig {
        self.transport.config()
    }

    pub fn player(&self) -> &DemoPlayerState {
        &self.player
    }

    /// Generation of the tick timer currently allowed to advance the transport
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Play/pause button
    pub fn toggle(&mut self) -> TransportEvent {
        let event = self.transport.toggle();
        self.generation = self.generation.wrapping_add(1);
        self.after(event);
        event
    }

    /// One firing of the tick subscription started for `generation`
    pub fn tick(&mut self, generation: u64) -> TransportEvent {
        if generation != self.generation {
            return TransportEvent::Ignored;
        }
        let event = self.transport.tick();
        self.after(event);
        event
    }

    /// Animation frame: moves the waveform while playing
    pub fn frame(&mut self, now: Instant) {
        if !self.is_playing() {
            self.last_frame = None;
            return;
        }
        if let Some(last) = self.last_frame {
            self.player
                .advance_wave(now.saturating_duration_since(last).as_secs_f32());
        }
        self.last_frame = Some(now);
    }

    fn after(&mut self, event: TransportEvent) {
        if event == TransportEvent::Completed {
            self.generation = self.generation.wrapping_add(1);
        }
        if event.stops_timer() {
            self.player.reshuffle(&mut self.rng);
            self.last_frame = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn demo() -> DemoState {
        DemoState::with_rng(TransportConfig::default(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_toggle_and_ticks() {
        let mut demo = demo();
        assert_eq!(demo.toggle(), TransportEvent::Started);
        for _ in 0..3 {
            assert_eq!(demo.tick(demo.generation()), TransportEvent::Advanced);
        }
        assert_eq!(demo.playback().elapsed, 1.5);
        assert!(demo.is_playing());
    }

    #[test]
    fn test_pause_reshuffles_bars_and_keeps_position() {
        let mut demo = demo();
        let resting: Vec<_> = demo.player().bars().to_vec();
        demo.toggle();
        demo.tick(demo.generation());
        assert_eq!(demo.toggle(), TransportEvent::Paused);
        assert_eq!(demo.playback().elapsed, 0.5);
        assert_ne!(demo.player().bars(), resting.as_slice());
    }

    #[test]
    fn test_completion_rewinds() {
        let mut demo = DemoState::with_rng(
            TransportConfig {
                duration_secs: 1.0,
                ..TransportConfig::default()
            },
            StdRng::seed_from_u64(1),
        );
        demo.toggle();
        let generation = demo.generation();
        assert_eq!(demo.tick(generation), TransportEvent::Advanced);
        assert_eq!(demo.tick(generation), TransportEvent::Completed);
        assert_eq!(demo.playback(), PlaybackState::stopped(1.0));
        assert_eq!(demo.tick(generation), TransportEvent::Ignored);
    }

    #[test]
    fn test_stale_tick_from_previous_session_is_discarded() {
        let mut demo = demo();
        demo.toggle();
        let first = demo.generation();
        demo.toggle();
        demo.toggle();

        assert_eq!(demo.tick(first), TransportEvent::Ignored);
        assert_eq!(demo.playback().elapsed, 0.0);
        assert_eq!(demo.tick(demo.generation()), TransportEvent::Advanced);
        assert_eq!(demo.playback().elapsed, 0.5);
    }

    #[test]
    fn test_frames_only_animate_while_playing() {
        let mut demo = demo();
        let t0 = Instant::now();
        demo.frame(t0);
        demo.frame(t0 + Duration::from_millis(100));
        assert_eq!(demo.player().wave_time(), 0.0);

        demo.toggle();
        demo.frame(t0);
        demo.frame(t0 + Duration::from_millis(250));
        assert!((demo.player().wave_time() - 0.25).abs() < 1e-4);
    }
}
