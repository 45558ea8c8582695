// src/gui/components/header.rs
//
// Title strip: app name, link to the listing, Randomize button, status.

use eframe::egui;
use crate::{config::consts::{APP_TITLE, LISTING_URL}, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(APP_TITLE);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label("Generate random");
                ui.hyperlink_to("Criterion Channel", LISTING_URL);
                ui.label("films to watch!");
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let red = egui::Color32::from_rgb(220, 30, 30);
            let button = egui::Button::new(
                egui::RichText::new("Randomize")
                    .color(egui::Color32::BLACK)
                    .strong())
                .fill(red);

            if ui.add(button).on_hover_text("Space").clicked() {
                app.randomize();
            }

            let label = if app.state.gui.show_saved { "Hide saved" } else { "Show saved" };
            if ui.button(label).clicked() {
                app.state.gui.show_saved = !app.state.gui.show_saved;
                logd!("UI: show_saved → {}", app.state.gui.show_saved);
            }

            ui.label(&app.status);
        });
    });
    ui.add_space(6.0);
}
