//! Self-scheduling transport controller
//!
//! Wraps a [`Transport`] together with its own [`TickTimer`]. The controller
//! is the only writer of its playback state: `toggle()` from the host, and the
//! tick task it owns.
//!
//! ## Cancellation
//!
//! The shared state carries a timer generation. Every toggle and every
//! boundary reset bumps it while holding the state lock, and a tick only
//! applies if its generation is still current. A stop is therefore effective
//! the moment `toggle()` returns, even if a tick task is already awake on
//! another worker thread and waiting for the lock. Aborting the task on top of
//! that makes sure nothing keeps running after teardown.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::sync::watch;

use super::machine::{Transport, TransportEvent};
use super::state::{PlaybackState, TransportConfig};
use super::timer::{TickFlow, TickTimer};

/// State shared between the controller and its tick task
struct Shared {
    transport: Transport,
    /// Generation of the only tick timer allowed to mutate the transport
    generation: u64,
    /// Change feed for hosts that re-render on every state change
    state_tx: watch::Sender<PlaybackState>,
}

impl Shared {
    fn publish(&self) {
        self.state_tx.send_replace(self.transport.state());
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    // Every critical section leaves the transport consistent, so poisoning is recoverable
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Simulated transport with its own tick timer
pub struct TransportController {
    shared: Arc<Mutex<Shared>>,
    timer: Option<TickTimer>,
    runtime: Handle,
}

impl TransportController {
    /// Create a stopped controller whose tick task will run on `runtime`
    pub fn new(config: TransportConfig, runtime: Handle) -> Self {
        let transport = Transport::new(config);
        let (state_tx, _) = watch::channel(transport.state());
        log::debug!(
            "TransportController: created ({:.1}s, tick {:?})",
            transport.config().duration_secs,
            transport.config().tick_interval()
        );

        Self {
            shared: Arc::new(Mutex::new(Shared {
                transport,
                generation: 0,
                state_tx,
            })),
            timer: None,
            runtime,
        }
    }

    /// Flip between playing and paused
    ///
    /// Starting schedules a fresh tick timer; pausing cancels the running one
    /// before returning.
    pub fn toggle(&mut self) -> TransportEvent {
        let (event, generation, interval) = {
            let mut shared = lock(&self.shared);
            let event = shared.transport.toggle();
            shared.generation = shared.generation.wrapping_add(1);
            shared.publish();
            (
                event,
                shared.generation,
                shared.transport.config().tick_interval(),
            )
        };

        self.release_timer();

        if event == TransportEvent::Started {
            let shared = Arc::clone(&self.shared);
            self.timer = Some(TickTimer::spawn(&self.runtime, interval, move || {
                apply_tick(&shared, generation)
            }));
        }

        event
    }

    /// Read-only snapshot of the current state
    pub fn query_state(&self) -> PlaybackState {
        lock(&self.shared).transport.state()
    }

    /// Subscribe to state changes
    ///
    /// The receiver yields a new snapshot after every toggle and tick, and
    /// reports the channel closed once the controller is gone.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        lock(&self.shared).state_tx.subscribe()
    }

    /// Whether a tick task is currently scheduled
    pub fn is_timer_active(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    pub fn config(&self) -> TransportConfig {
        *lock(&self.shared).transport.config()
    }

    /// Single release point for the tick timer
    ///
    /// Used by pause, by restart (where a boundary reset may have left a
    /// finished task behind), and by teardown.
    fn release_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            log::trace!("TransportController: releasing tick timer");
            drop(timer);
        }
    }
}

/// Tick callback run by the timer task
fn apply_tick(shared: &Mutex<Shared>, generation: u64) -> TickFlow {
    let mut shared = lock(shared);
    if shared.generation != generation {
        // Superseded by a toggle or teardown
        return TickFlow::Stop;
    }

    match shared.transport.tick() {
        TransportEvent::Advanced => {
            shared.publish();
            TickFlow::Continue
        }
        TransportEvent::Completed => {
            shared.generation = shared.generation.wrapping_add(1);
            shared.publish();
            TickFlow::Stop
        }
        _ => TickFlow::Stop,
    }
}

impl Drop for TransportController {
    fn drop(&mut self) {
        {
            let mut shared = lock(&self.shared);
            shared.generation = shared.generation.wrapping_add(1);
        }
        self.release_timer();
        log::debug!("TransportController: torn down");
    }
}
