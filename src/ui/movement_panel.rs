//! # Movement Panel
//!
//! Central panel showing the robot on its movement grid and the direction
//! pad that dispatches `Intent::Move`.
//!
//! ## Coordinate Mapping
//!
//! The grid spans `-POSITION_LIMIT..=POSITION_LIMIT` on both axes and is
//! mapped linearly onto a square area with `egui::lerp`. Screen and grid share
//! orientation: negative `y` is up.

use eframe::egui;
use egui::{Color32, RichText};

use crate::telemetry::types::{POSITION_LIMIT, Position};
use crate::telemetry::{Direction, Intent};
use crate::ui::{AppState, CYAN, INACTIVE, PANEL_BG, pulse_alpha, status_color};

/// Grid line spacing in world units; one line per default move step.
const GRID_SPACING: i32 = 15;
const PAD_BUTTON_SIZE: egui::Vec2 = egui::vec2(56.0, 40.0);

/// Render the movement grid and the direction pad in the central panel.
///
/// # Parameters
///
/// * `ctx` - egui context
/// * `state` - Application state; pad clicks dispatch `Intent::Move`
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("LUMO Movement");
        ui.separator();

        let side = ui.available_width().min(ui.available_height() - 160.0).max(120.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
        draw_field(ui, rect, state);

        ui.label(
            RichText::new(format!("X: {} Y: {}", state.state.position.x, state.state.position.y))
                .monospace()
                .color(status_color(state.state.power)),
        );
        ui.add_space(8.0);
        direction_pad(ui, state);
    });
}

/// Map a grid position to a screen point inside `rect`.
pub fn position_to_screen(rect: egui::Rect, position: Position) -> egui::Pos2 {
    let span = (2 * POSITION_LIMIT) as f32;
    let tx = (position.x + POSITION_LIMIT) as f32 / span;
    let ty = (position.y + POSITION_LIMIT) as f32 / span;
    egui::pos2(egui::lerp(rect.left()..=rect.right(), tx), egui::lerp(rect.top()..=rect.bottom(), ty))
}

fn draw_field(ui: &egui::Ui, rect: egui::Rect, state: &AppState) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, PANEL_BG);

    let grid_color = Color32::from_rgba_unmultiplied(0, 200, 255, 25);
    let mut offset = -POSITION_LIMIT;
    while offset <= POSITION_LIMIT {
        let top = position_to_screen(rect, Position { x: offset, y: -POSITION_LIMIT });
        let bottom = position_to_screen(rect, Position { x: offset, y: POSITION_LIMIT });
        painter.line_segment([top, bottom], (1.0, grid_color));
        let left = position_to_screen(rect, Position { x: -POSITION_LIMIT, y: offset });
        let right = position_to_screen(rect, Position { x: POSITION_LIMIT, y: offset });
        painter.line_segment([left, right], (1.0, grid_color));
        offset += GRID_SPACING;
    }

    // Crosshair at the origin
    let origin = position_to_screen(rect, Position::default());
    let crosshair = CYAN.gamma_multiply(0.3);
    painter.line_segment([egui::pos2(rect.left(), origin.y), egui::pos2(rect.right(), origin.y)], (1.0, crosshair));
    painter.line_segment([egui::pos2(origin.x, rect.top()), egui::pos2(origin.x, rect.bottom())], (1.0, crosshair));

    let snapshot = state.state;
    let robot = position_to_screen(rect, snapshot.position);
    let radius = rect.width() / 16.0;
    if snapshot.power {
        painter.circle_filled(robot, radius * 1.6, CYAN.gamma_multiply(0.25 * pulse_alpha(snapshot.pulse)));
        painter.circle_filled(robot, radius, CYAN);
    } else {
        painter.circle_filled(robot, radius, INACTIVE);
    }
    painter.text(robot, egui::Align2::CENTER_CENTER, "LUMO", egui::FontId::monospace(radius * 0.6), Color32::BLACK);
}

fn direction_pad(ui: &mut egui::Ui, state: &AppState) {
    let enabled = state.state.power;
    let pad_button = |ui: &mut egui::Ui, direction: Direction| {
        let glyph = match direction {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Left => "◀",
            Direction::Right => "▶",
        };
        let button = egui::Button::new(RichText::new(glyph).size(18.0)).min_size(PAD_BUTTON_SIZE);
        if ui.add_enabled(enabled, button).clicked() {
            state.dispatch(Intent::Move(direction));
        }
    };

    egui::Grid::new("direction_pad").spacing(egui::vec2(4.0, 4.0)).show(ui, |ui| {
        ui.label("");
        pad_button(ui, Direction::Up);
        ui.label("");
        ui.end_row();

        pad_button(ui, Direction::Left);
        ui.label("");
        pad_button(ui, Direction::Right);
        ui.end_row();

        ui.label("");
        pad_button(ui, Direction::Down);
        ui.label("");
        ui.end_row();
    });
}
