use eframe::egui;
use embassy_executor::{Executor, Spawner};
use env_logger::Builder;
use log::{LevelFilter, error, info, warn};
use std::path::Path;
use std::thread;

use crate::config::{CONFIG_FILE_NAME, DashboardConfig};
use crate::telemetry::types::{IntentChannel, IntentReceiver, ShutdownSignal, StateUpdateChannel, StateUpdateSender};
use crate::telemetry::{ShutdownGuard, dashboard_task};
use crate::ui::AppState;

mod config;
mod telemetry;
mod ui;

fn embassy_init(spawner: Spawner, config: DashboardConfig, updates: StateUpdateSender, intents: IntentReceiver, shutdown: &'static ShutdownSignal) {
    info!("Spawning dashboard task");
    if let Err(err) = spawner.spawn(dashboard_task(config, updates, intents, shutdown)) {
        error!("Failed to spawn dashboard task: {err:?}");
    }
}

fn main() {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("lumo_dashboard"), LevelFilter::Debug)
        .init();

    info!("Starting up");

    let config = match DashboardConfig::load_or_default(Path::new(CONFIG_FILE_NAME)) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err:#}; using built-in defaults");
            DashboardConfig::default()
        }
    };

    let state_update_channel: &'static StateUpdateChannel = Box::leak(Box::new(StateUpdateChannel::new()));
    let intent_channel: &'static IntentChannel = Box::leak(Box::new(IntentChannel::new()));
    let shutdown: &'static ShutdownSignal = Box::leak(Box::new(ShutdownSignal::new()));

    let updates_tx = state_update_channel.sender();
    let updates_rx = state_update_channel.receiver();
    let intents_tx = intent_channel.sender();
    let intents_rx = intent_channel.receiver();

    // Spawn Embassy executor on a dedicated background thread
    let spawn_result = thread::Builder::new().name("embassy-executor".to_string()).spawn(move || {
        // Leak the executor to satisfy the 'static lifetime required by run()
        let executor: &'static mut Executor = Box::leak(Box::new(Executor::new()));
        executor.run(|spawner| embassy_init(spawner, config, updates_tx, intents_rx, shutdown));
    });
    if let Err(err) = spawn_result {
        error!("Failed to spawn embassy executor thread: {err}");
        return;
    }

    // Start the GUI on the main thread (required on macOS)
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_title("Lumo Dashboard").with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    let result = eframe::run_native(
        "Lumo Dashboard",
        native_options,
        Box::new(move |_cc| Ok(Box::new(AppState::new(updates_rx, intents_tx, ShutdownGuard::new(shutdown))))),
    );
    if let Err(err) = result {
        error!("UI terminated with error: {err}");
    }

    // The app (and its guard) is gone by now; signal again in case the UI
    // never got created.
    shutdown.signal(());
    info!("Shut down");
}
