//! # Sensor Panel
//!
//! Right side panel with one card per environment sensor. A card turns red
//! when its reading leaves the healthy band (`SensorKind::is_nominal`).

use eframe::egui;
use egui::RichText;

use crate::telemetry::SensorKind;
use crate::telemetry::types::SENSOR_MAX;
use crate::ui::{AppState, CYAN, INACTIVE, RED};

/// Render one card per sensor, outlined red when the reading is in alert.
///
/// # Parameters
///
/// * `ctx` - egui context
/// * `state` - Application state holding the latest snapshot
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("sensors").exact_width(260.0).show(ctx, |ui| {
        ui.heading("Sensors");
        ui.separator();
        for kind in SensorKind::ALL {
            let value = state.state.sensors.get(kind);
            sensor_card(ui, kind, value);
            ui.add_space(8.0);
        }
    });
}

fn sensor_card(ui: &mut egui::Ui, kind: SensorKind, value: f64) {
    let color = if kind.is_nominal(value) { CYAN } else { RED };
    egui::Frame::group(ui.style()).stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5))).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(kind.label()).monospace().small().color(INACTIVE));
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}", value.round() as i64)).monospace().size(28.0).strong().color(color));
            ui.label(RichText::new(kind.unit()).monospace().color(color));
        });
        ui.add(egui::ProgressBar::new((value / SENSOR_MAX).clamp(0.0, 1.0) as f32).fill(color).desired_height(6.0));
    });
}
