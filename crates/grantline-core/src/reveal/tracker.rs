//! Scroll-driven reveal tracker
//!
//! Tracks registered page elements against the scroll viewport and reports
//! the eased animation progress of each one. Times are passed in explicitly
//! (`*_at` methods) so the host can use one frame timestamp for everything.

use std::time::{Duration, Instant};

use super::{Animation, RevealConfig, ScrollAnimator};

/// Handle of a registered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

/// An element that animates in when scrolled into view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    /// Distance from the top of the page (pixels)
    pub top: f32,
    /// Element height (pixels), used for mirrored hiding
    pub height: f32,
    pub animation: Animation,
    /// Extra wait before the entrance starts
    pub delay: Duration,
}

impl RevealTarget {
    pub fn new(top: f32, height: f32, animation: Animation) -> Self {
        Self {
            top,
            height,
            animation,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms);
        self
    }
}

/// Where an element is in its reveal cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet revealed, or fully hidden again
    Hidden,
    /// Revealed at the given instant (animation may still be running)
    Entering(Instant),
    /// Started hiding at the given instant
    Leaving(Instant),
}

#[derive(Debug, Clone)]
struct Entry {
    target: RevealTarget,
    phase: RevealPhase,
}

/// Animate-on-scroll engine
///
/// Until [`ScrollAnimator::init`] is called every element reports full
/// progress, so a page whose engine never starts still shows its content.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    config: Option<RevealConfig>,
    entries: Vec<Entry>,
    scroll_y: f32,
    viewport_height: f32,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element; it starts hidden
    pub fn register(&mut self, target: RevealTarget) -> RevealId {
        self.entries.push(Entry {
            target,
            phase: RevealPhase::Hidden,
        });
        RevealId(self.entries.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    pub fn config(&self) -> Option<&RevealConfig> {
        self.config.as_ref()
    }

    /// Initialize with an explicit timestamp
    pub fn init_at(&mut self, config: &RevealConfig, now: Instant) {
        self.config = Some(*config);
        log::debug!("RevealTracker: initialized with {} elements", self.entries.len());
        self.evaluate(now);
    }

    /// Re-evaluate with an explicit timestamp
    pub fn refresh_at(&mut self, now: Instant) {
        if self.config.is_none() {
            log::debug!("RevealTracker: refresh before init ignored");
            return;
        }
        self.evaluate(now);
    }

    /// Update the scroll position and viewport height, then re-evaluate
    pub fn set_viewport_at(&mut self, scroll_y: f32, viewport_height: f32, now: Instant) {
        self.scroll_y = scroll_y.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        if self.config.is_some() {
            self.evaluate(now);
        }
    }

    pub fn phase(&self, id: RevealId) -> Option<RevealPhase> {
        self.entries.get(id.0).map(|entry| entry.phase)
    }

    /// Whether the element is (becoming) visible
    pub fn is_revealed(&self, id: RevealId) -> bool {
        !self.is_initialized() || matches!(self.phase(id), Some(RevealPhase::Entering(_)))
    }

    pub fn animation(&self, id: RevealId) -> Animation {
        self.entries
            .get(id.0)
            .map(|entry| entry.target.animation)
            .unwrap_or_default()
    }

    /// Eased progress of the element at `now` (0.0 hidden, 1.0 settled)
    pub fn progress(&self, id: RevealId, now: Instant) -> f32 {
        let Some(config) = self.config else {
            return 1.0;
        };
        let Some(entry) = self.entries.get(id.0) else {
            return 1.0;
        };

        match entry.phase {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Entering(since) => {
                let started = since + entry.target.delay;
                let linear = linear_progress(now.saturating_duration_since(started), config.duration());
                config.easing.apply(linear)
            }
            RevealPhase::Leaving(since) => {
                let linear = linear_progress(now.saturating_duration_since(since), config.duration());
                1.0 - config.easing.apply(linear)
            }
        }
    }

    /// Whether any element is mid-animation (the host should keep redrawing)
    pub fn is_animating(&self, now: Instant) -> bool {
        let Some(config) = self.config else {
            return false;
        };
        self.entries.iter().any(|entry| match entry.phase {
            RevealPhase::Hidden => false,
            RevealPhase::Entering(since) => now < since + entry.target.delay + config.duration(),
            RevealPhase::Leaving(since) => now < since + config.duration(),
        })
    }

    fn evaluate(&mut self, now: Instant) {
        let Some(config) = self.config else {
            return;
        };
        let viewport_bottom = self.scroll_y + self.viewport_height;

        for entry in &mut self.entries {
            let target = entry.target;
            let below_trigger = target.top + config.offset_px > viewport_bottom;
            let passed_top = config.mirror && target.top + target.height < self.scroll_y + config.offset_px;
            let show = !below_trigger && !passed_top;

            entry.phase = match (entry.phase, show) {
                (RevealPhase::Hidden, true) | (RevealPhase::Leaving(_), true) => {
                    RevealPhase::Entering(now)
                }
                (RevealPhase::Entering(_), false) if !config.once => RevealPhase::Leaving(now),
                (phase, _) => phase,
            };
        }
    }
}

fn linear_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

impl ScrollAnimator for RevealTracker {
    fn init(&mut self, config: &RevealConfig) {
        self.init_at(config, Instant::now());
    }

    fn refresh(&mut self) {
        self.refresh_at(Instant::now());
    }
}
