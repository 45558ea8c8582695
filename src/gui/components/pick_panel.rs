// src/gui/components/pick_panel.rs
//
// The current pick: poster, "Title (Year)" linking to the film page,
// "Director — Country" underneath. Nothing is drawn without a pick.

use eframe::egui;
use crate::gui::app::App;

const POSTER_MAX_W: f32 = 720.0;
const POSTER_MAX_H: f32 = 405.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(rec) = app.session.current() else {
        ui.centered_and_justified(|ui| {
            ui.label("No film picked");
        });
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("pick_scroll")
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(poster) = rec.poster() {
                    ui.add(
                        egui::Image::new(poster)
                            .max_width(POSTER_MAX_W)
                            .max_height(POSTER_MAX_H)
                            .maintain_aspect_ratio(true),
                    );
                }

                ui.add_space(8.0);

                let headline = egui::RichText::new(rec.headline()).heading().strong();
                match rec.url {
                    Some(url) => { ui.hyperlink_to(headline, url); }
                    None => { ui.label(headline); }
                }

                let byline = rec.byline();
                if !byline.is_empty() {
                    ui.label(byline);
                }
            });
        });
}
