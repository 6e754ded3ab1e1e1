//! Dashboard task: the single owner of the state store at runtime.
//!
//! Each loop iteration `select3` waits for, in priority order:
//! 1) the shutdown signal, which ends the loop and drops the ticker,
//! 2) an intent from the UI, applied through the intent handlers,
//! 3) the next ticker deadline, which advances the random walk.
//!
//! Every change is published to the UI as a full snapshot. Publishing uses
//! `try_send`; when the UI is not draining, snapshots are dropped and the
//! next change carries the complete state again.
//!
//! Deadlines come from a `TickSource`. The task uses an `embassy_time::Ticker`;
//! anything else that resolves once per period can drive the loop.

use embassy_futures::select::{Either3, select3};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Receiver, Sender, TrySendError};
use embassy_time::Ticker;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::store::StateStore;
use super::ticker::tick;
use super::types::{INTENT_QUEUE_SIZE, Intent, IntentReceiver, STATE_UPDATE_QUEUE_SIZE, ShutdownSignal, StateUpdateSender, SystemState};
use crate::config::DashboardConfig;

/// Embassy entry point. Owns a fresh store seeded from entropy and runs until
/// `shutdown` is raised.
#[embassy_executor::task]
pub async fn dashboard_task(config: DashboardConfig, updates: StateUpdateSender, intents: IntentReceiver, shutdown: &'static ShutdownSignal) {
    let mut rng = StdRng::from_entropy();
    let ticker = Ticker::every(config.tick_interval());
    let final_state = run_dashboard(StateStore::new(SystemState::default()), &config, &mut rng, ticker, updates, intents, shutdown).await;
    log::info!(
        "Dashboard task stopped (power: {}, position: ({}, {}))",
        final_state.power,
        final_state.position.x,
        final_state.position.y
    );
}

/// Periodic deadline driving the simulation ticker.
pub trait TickSource {
    /// Resolves when the next tick is due.
    fn next_tick(&mut self) -> impl Future<Output = ()>;
}

impl TickSource for Ticker {
    fn next_tick(&mut self) -> impl Future<Output = ()> {
        self.next()
    }
}

/// Run the dashboard loop until `shutdown` is signalled and return the last
/// state.
///
/// # Parameters
///
/// * `store` - State owned by the loop for its whole lifetime
/// * `config` - Move step and perturbation spreads
/// * `rng` - Random source for the telemetry walk
/// * `ticks` - Tick deadlines; dropped when the loop ends
/// * `updates` - Snapshot channel towards the UI, written with `try_send`
/// * `intents` - Intent channel from the UI, consumed in FIFO order
/// * `shutdown` - Ends the loop; takes priority over pending intents and ticks
pub async fn run_dashboard<R: Rng, T: TickSource>(
    mut store: StateStore,
    config: &DashboardConfig,
    rng: &mut R,
    mut ticks: T,
    updates: Sender<'_, CriticalSectionRawMutex, SystemState, STATE_UPDATE_QUEUE_SIZE>,
    intents: Receiver<'_, CriticalSectionRawMutex, Intent, INTENT_QUEUE_SIZE>,
    shutdown: &ShutdownSignal,
) -> SystemState {
    log::info!("Dashboard task started, tick interval {} ms", config.tick_interval_ms);
    publish(&updates, store.get());

    loop {
        match select3(shutdown.wait(), intents.receive(), ticks.next_tick()).await {
            Either3::First(()) => {
                log::info!("Shutdown requested, stopping simulation ticker");
                break;
            }
            Either3::Second(intent) => {
                let before = store.get();
                if !intent.is_allowed(&before) {
                    log::debug!("Ignoring {:?}: power is off", intent);
                    continue;
                }
                let after = store.apply(|s| intent.apply(s, config.move_step));
                if before.power != after.power {
                    log::info!("Main power {}", if after.power { "ON" } else { "OFF" });
                } else {
                    log::debug!("Applied {:?}", intent);
                }
                if after != before {
                    publish(&updates, after);
                }
            }
            Either3::Third(()) => {
                let after = store.apply(|s| tick(s, &config.spreads, rng));
                log::trace!("Tick {} pressures {:?}", after.pulse, after.pressures);
                publish(&updates, after);
            }
        }
    }

    store.get()
}

fn publish(updates: &Sender<'_, CriticalSectionRawMutex, SystemState, STATE_UPDATE_QUEUE_SIZE>, state: SystemState) {
    if let Err(TrySendError::Full(_)) = updates.try_send(state) {
        log::debug!("State update queue full, dropping snapshot");
    }
}

/// Cancels the dashboard task when dropped.
///
/// Held by whoever owns the dashboard's lifetime (the UI), so closing the
/// window stops the ticker even on an early return.
pub struct ShutdownGuard {
    signal: &'static ShutdownSignal,
}

impl ShutdownGuard {
    pub fn new(signal: &'static ShutdownSignal) -> Self {
        Self { signal }
    }

    /// Request shutdown now. Repeated calls are harmless.
    pub fn shutdown(&self) {
        self.signal.signal(());
    }
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        self.shutdown();
    }
}
