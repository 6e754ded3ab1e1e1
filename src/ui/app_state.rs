//! # Application State
//!
//! `AppState` is the presentation side of the dashboard. It implements
//! `eframe::App` and:
//!
//! - Drains state snapshots published by the dashboard task via `state_rx`
//! - Sends user intents to the dashboard task via `intent_tx`
//! - Delegates rendering to the panel modules
//! - Drives a 50 FPS repaint loop via `request_repaint_after`
//! - Holds the `ShutdownGuard` that stops the dashboard task on teardown
//!
//! The UI never mutates `SystemState` itself; what it shows is always the
//! last snapshot received.

use eframe::egui;
use embassy_sync::channel::TrySendError;
use std::time::{Duration, Instant};

use super::{control_panel, movement_panel, sensor_panel, top_panel};
use crate::telemetry::types::{IntentSender, StateUpdateReceiver};
use crate::telemetry::{Intent, ShutdownGuard, SystemState};

const REPAINT_INTERVAL: Duration = Duration::from_millis(20);

pub struct AppState {
    /// Receiver for snapshots from the dashboard task.
    pub state_rx: StateUpdateReceiver,
    /// Sender for intents to the dashboard task.
    pub intent_tx: IntentSender,
    /// Latest snapshot; starts at the defaults the task also starts from.
    pub state: SystemState,
    /// When the UI was opened, shown as session uptime.
    pub opened_at: Instant,
    /// Real time of the last snapshot, used to flag a stalled task.
    pub last_update: Option<Instant>,
    shutdown: ShutdownGuard,
}

impl AppState {
    pub fn new(state_rx: StateUpdateReceiver, intent_tx: IntentSender, shutdown: ShutdownGuard) -> Self {
        Self {
            state_rx,
            intent_tx,
            state: SystemState::default(),
            opened_at: Instant::now(),
            last_update: None,
            shutdown,
        }
    }

    /// Queue an intent for the dashboard task. Never blocks the UI thread.
    pub fn dispatch(&self, intent: Intent) {
        if let Err(TrySendError::Full(intent)) = self.intent_tx.try_send(intent) {
            log::warn!("Intent queue full, dropping {:?}", intent);
        }
    }

    /// Pull every pending snapshot and keep the newest.
    fn drain_updates(&mut self) {
        while let Ok(state) = self.state_rx.try_receive() {
            self.state = state;
            self.last_update = Some(Instant::now());
        }
    }

    /// True when no snapshot arrived for a while, i.e. the ticker is not
    /// running.
    pub fn is_stale(&self) -> bool {
        match self.last_update {
            Some(at) => at.elapsed() > Duration::from_secs(1),
            None => true,
        }
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_updates();

        if ctx.input(|i| i.viewport().close_requested()) {
            self.shutdown.shutdown();
        }

        top_panel::render(ctx, self);
        control_panel::render(ctx, self);
        sensor_panel::render(ctx, self);
        movement_panel::render(ctx, self);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
