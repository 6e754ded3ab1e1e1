//! Telemetry & control state machine.
//!
//! Everything that owns or changes dashboard state lives here; the UI only
//! reads snapshots and sends intents.
//!
//! ## Module Organization
//!
//! - `types`: `SystemState`, intents, clamp ranges and channel aliases
//! - `store`: the single owner of `SystemState`
//! - `intents`: pure, power-gated intent handlers
//! - `ticker`: the bounded random walk run once per tick
//! - `dashboard_task`: async loop tying ticker, intents and shutdown together
//!
//! ## Public API
//!
//! `dashboard_task` is spawned on the Embassy executor. It publishes snapshots
//! on a `StateUpdateChannel` and consumes `Intent`s from an `IntentChannel`.

pub mod dashboard_task;
pub mod intents;
pub mod store;
pub mod ticker;
pub mod types;

pub use dashboard_task::{ShutdownGuard, dashboard_task};
pub use types::{Direction, Intent, Roller, SensorKind, SystemState};
