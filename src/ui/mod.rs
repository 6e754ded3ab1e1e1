// UI module for the Lumo dashboard
//
// This module organizes the UI into separate components:
// - `top_panel`: Title bar and master power switch
// - `control_panel`: Pressure gauges and actuator status/controls (left)
// - `movement_panel`: Robot position view and direction pad (center)
// - `sensor_panel`: Environment sensor readouts (right)
// - `app_state`: Application state and the main update loop

pub mod app_state;
pub mod control_panel;
pub mod movement_panel;
pub mod sensor_panel;
pub mod top_panel;

use egui::Color32;

use crate::telemetry::types::PULSE_PERIOD;

pub use app_state::AppState;

/// Accent colour for active/nominal elements.
pub const CYAN: Color32 = Color32::from_rgb(34, 211, 238);
/// Accent colour for alerts, reverse roller and the powered master switch.
pub const RED: Color32 = Color32::from_rgb(248, 113, 113);
/// Colour of anything unpowered or inactive.
pub const INACTIVE: Color32 = Color32::from_rgb(107, 114, 128);
pub const PANEL_BG: Color32 = Color32::from_rgb(10, 12, 16);

/// Indicator colour for an on/off element.
pub fn status_color(active: bool) -> Color32 {
    if active { CYAN } else { INACTIVE }
}

/// Opacity of blinking indicator dots for a given pulse counter value.
///
/// Triangle wave over one pulse period, never fully transparent.
pub fn pulse_alpha(pulse: u8) -> f32 {
    let phase = (pulse % PULSE_PERIOD) as f32 / PULSE_PERIOD as f32;
    0.35 + 0.65 * (1.0 - (2.0 * phase - 1.0).abs())
}
