//! Waveform bar shapes
//!
//! Bars are decorative. At rest each one sits at a random height; while the
//! player is advancing they oscillate, each with its own period and phase.

use std::f32::consts::TAU;

use rand::Rng;

/// Number of waveform bars in the player
pub const BAR_COUNT: usize = 30;

/// Lowest bar, as a fraction of the waveform box height
pub const BAR_MIN_HEIGHT: f32 = 0.2;

/// Tallest bar, as a fraction of the waveform box height
pub const BAR_MAX_HEIGHT: f32 = 0.8;

/// One waveform bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Height while stopped (0.2..0.6)
    pub rest_height: f32,
    /// Offset into the oscillation cycle (0..1)
    pub phase: f32,
    /// Seconds per oscillation while playing (0.4..0.8)
    pub period: f32,
}

impl Bar {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            rest_height: rng.gen_range(0.2..0.6),
            phase: rng.gen_range(0.0..1.0),
            period: rng.gen_range(0.4..0.8),
        }
    }
}

/// Display state of the demo player
#[derive(Debug, Clone)]
pub struct DemoPlayerState {
    bars: Vec<Bar>,
    /// Seconds of wave animation accumulated while playing
    wave_time: f32,
}

impl DemoPlayerState {
    /// Randomised bar heights drawn from `rng`
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            bars: (0..BAR_COUNT).map(|_| Bar::random(rng)).collect(),
            wave_time: 0.0,
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn wave_time(&self) -> f32 {
        self.wave_time
    }

    /// New resting shape, called when playback stops
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for bar in &mut self.bars {
            *bar = Bar::random(rng);
        }
        self.wave_time = 0.0;
    }

    /// Move the oscillation forward by `dt` seconds
    pub fn advance_wave(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            // Wrap to keep f32 precision over long sessions
            self.wave_time = (self.wave_time + dt) % 1_000.0;
        }
    }

    /// Height of bar `idx` as a fraction of the waveform box
    pub fn bar_height(&self, idx: usize, playing: bool) -> f32 {
        let Some(bar) = self.bars.get(idx) else {
            return BAR_MIN_HEIGHT;
        };
        if !playing {
            return bar.rest_height;
        }
        let cycle = self.wave_time / bar.period + bar.phase;
        let wave = 0.5 - 0.5 * (TAU * cycle).cos();
        BAR_MIN_HEIGHT + (BAR_MAX_HEIGHT - BAR_MIN_HEIGHT) * wave
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bar_count_and_ranges() {
        let state = DemoPlayerState::with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(state.bars().len(), BAR_COUNT);
        for bar in state.bars() {
            assert!((0.2..0.6).contains(&bar.rest_height));
            assert!((0.0..1.0).contains(&bar.phase));
            assert!((0.4..0.8).contains(&bar.period));
        }
    }

    #[test]
    fn test_rest_height_when_stopped() {
        let mut state = DemoPlayerState::with_rng(&mut StdRng::seed_from_u64(1));
        state.advance_wave(0.37);
        for idx in 0..BAR_COUNT {
            assert_eq!(state.bar_height(idx, false), state.bars()[idx].rest_height);
        }
    }

    #[test]
    fn test_playing_heights_stay_in_band() {
        let mut state = DemoPlayerState::with_rng(&mut StdRng::seed_from_u64(3));
        for _ in 0..500 {
            state.advance_wave(1.0 / 60.0);
            for idx in 0..BAR_COUNT {
                let h = state.bar_height(idx, true);
                assert!(h >= BAR_MIN_HEIGHT - 1e-5 && h <= BAR_MAX_HEIGHT + 1e-5, "{h}");
            }
        }
    }

    #[test]
    fn test_wave_moves_while_playing() {
        let mut state = DemoPlayerState::with_rng(&mut StdRng::seed_from_u64(11));
        let before = state.bar_height(0, true);
        state.advance_wave(state.bars()[0].period / 4.0);
        assert!((state.bar_height(0, true) - before).abs() > 1e-3);
    }

    #[test]
    fn test_reshuffle_resets_wave() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = DemoPlayerState::with_rng(&mut rng);
        let original: Vec<Bar> = state.bars().to_vec();
        state.advance_wave(2.0);
        state.reshuffle(&mut rng);
        assert_eq!(state.wave_time(), 0.0);
        assert_ne!(state.bars(), original.as_slice());
    }

    #[test]
    fn test_ignores_bad_dt_and_out_of_range_index() {
        let mut state = DemoPlayerState::with_rng(&mut StdRng::seed_from_u64(2));
        state.advance_wave(f32::NAN);
        state.advance_wave(-1.0);
        assert_eq!(state.wave_time(), 0.0);
        assert_eq!(state.bar_height(BAR_COUNT, true), BAR_MIN_HEIGHT);
    }
}
