//! # Control Panel - Pressure Gauges and Actuators
//!
//! Left side panel with:
//! - Four vertical pressure gauges (0..=500 PSI)
//! - Gamepad link indicator (read-only)
//! - Roller button cycling STATIC → IN → OUT
//! - Air compressor toggle
//!
//! Actuator buttons are disabled while main power is off. Button labels show
//! the stored roller direction and compressor setting; only their colours
//! follow the power-gated view, so an unpowered roller keeps its label but
//! is drawn inactive.

use eframe::egui;
use egui::{Color32, RichText};

use crate::telemetry::types::PRESSURE_MAX;
use crate::telemetry::{Intent, Roller};
use crate::ui::{AppState, CYAN, INACTIVE, PANEL_BG, RED, pulse_alpha, status_color};

const GAUGE_WIDTH: f32 = 40.0;
const GAUGE_HEIGHT: f32 = 130.0;

/// Render the left side panel with pressure gauges and actuator buttons.
///
/// # Parameters
///
/// * `ctx` - egui context
/// * `state` - Application state; button clicks are dispatched through it
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::left("controls").exact_width(280.0).show(ctx, |ui| {
        ui.heading("Pressure");
        ui.separator();
        ui.horizontal(|ui| {
            for (index, value) in state.state.pressures.iter().enumerate() {
                draw_gauge(ui, index, *value);
            }
        });

        ui.add_space(12.0);
        ui.heading("Actuators");
        ui.separator();

        let snapshot = state.state;
        indicator(ui, "🎮 PS4 CONTROLLER", snapshot.controller_active(), CYAN, snapshot.pulse);

        ui.add_space(6.0);
        let roller = snapshot.active_roller();
        let roller_color = match roller {
            Roller::Off => INACTIVE,
            Roller::In => CYAN,
            Roller::Out => RED,
        };
        let roller_button = egui::Button::new(RichText::new(format!("⟳ {}", snapshot.roller.label())).monospace().color(roller_color))
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add_enabled(snapshot.power, roller_button).clicked() {
            state.dispatch(Intent::CycleRoller);
        }

        ui.add_space(6.0);
        let compressor_button = egui::Button::new(
            RichText::new(format!("💨 AIR COMPRESSOR {}", if snapshot.compressor { "ON" } else { "OFF" }))
                .monospace()
                .color(status_color(snapshot.compressor_active())),
        )
        .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add_enabled(snapshot.power, compressor_button).clicked() {
            state.dispatch(Intent::ToggleCompressor);
        }
    });
}

/// One vertical gauge filled proportionally to `value / PRESSURE_MAX`.
fn draw_gauge(ui: &mut egui::Ui, index: usize, value: f64) {
    ui.vertical(|ui| {
        ui.label(RichText::new(format!("BAR {}", index + 1)).monospace().small().color(CYAN));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(GAUGE_WIDTH, GAUGE_HEIGHT), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, PANEL_BG);

        let fraction = (value / PRESSURE_MAX).clamp(0.0, 1.0) as f32;
        let fill = egui::Rect::from_min_max(egui::pos2(rect.left(), rect.bottom() - rect.height() * fraction), rect.max);
        painter.rect_filled(fill, 4.0, CYAN.gamma_multiply(0.8));
        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - 10.0),
            egui::Align2::CENTER_CENTER,
            format!("{}", value.round() as i64),
            egui::FontId::monospace(12.0),
            Color32::WHITE,
        );
        ui.label(RichText::new("PSI").monospace().small().color(INACTIVE));
    });
}

/// Read-only status row with a blinking dot when active.
fn indicator(ui: &mut egui::Ui, label: &str, active: bool, color: Color32, pulse: u8) {
    ui.horizontal(|ui| {
        let text_color = if active { color } else { INACTIVE };
        ui.label(RichText::new(label).monospace().color(text_color));
        if active {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 4.0, color.gamma_multiply(pulse_alpha(pulse)));
        }
    });
}
