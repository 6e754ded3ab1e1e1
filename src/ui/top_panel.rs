//! # Top Panel - Title and Master Power
//!
//! Renders the fixed-height header: dashboard title on the left, link status
//! and the master power switch on the right.

use eframe::egui;
use egui::RichText;

use crate::telemetry::Intent;
use crate::ui::{AppState, CYAN, INACTIVE, RED, status_color};

/// Render the header bar.
///
/// Shows the title, the master power button (dispatches `Intent::TogglePower`),
/// the session clock and whether snapshots are still arriving.
///
/// # Parameters
///
/// * `ctx` - egui context
/// * `state` - Application state holding the latest snapshot and intent sender
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("header").exact_height(80.0).show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("ASTERIA").size(30.0).strong().color(CYAN));
                    ui.label(RichText::new("NOVA").size(30.0).strong().color(RED));
                });
                ui.label(RichText::new("ROBOTIC CONTROL INTERFACE v2.0").monospace().small().color(INACTIVE));
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let power = state.state.power;
                let (label, fill) = if power { ("⏻ ONLINE", RED) } else { ("⏻ OFFLINE", INACTIVE) };
                let button = egui::Button::new(RichText::new(label).monospace().strong().size(18.0).color(egui::Color32::WHITE))
                    .fill(fill)
                    .min_size(egui::vec2(140.0, 48.0));
                if ui.add(button).on_hover_text("Master power").clicked() {
                    state.dispatch(Intent::TogglePower);
                }

                ui.add_space(16.0);
                let uptime = state.opened_at.elapsed().as_secs();
                ui.label(
                    RichText::new(format!("SESSION {:02}:{:02}:{:02}", uptime / 3600, (uptime / 60) % 60, uptime % 60))
                        .monospace()
                        .color(INACTIVE),
                );

                ui.add_space(16.0);
                let (link, link_ok) = if state.is_stale() { ("TELEMETRY STALLED", false) } else { ("TELEMETRY LIVE", true) };
                ui.label(RichText::new(link).monospace().color(if link_ok { status_color(true) } else { RED }));
            });
        });
    });
}
