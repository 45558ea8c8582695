// src/gui/components/saved_panel.rs
//
// Saved list. Clicking an entry removes it; "Add" saves the current pick.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Saved movies");
    ui.separator();

    let mut remove: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("saved_scroll")
        .auto_shrink([false, true])
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            for title in app.session.saved().titles() {
                let resp = ui
                    .selectable_label(false, title)
                    .on_hover_text("Click to remove");
                if resp.clicked() {
                    remove = Some(title.clone());
                }
            }
        });

    // Apply after the borrow of the list ends
    if let Some(title) = remove {
        logf!("UI: Remove saved '{}'", title);
        app.remove_saved(&title);
    }

    ui.separator();

    let can_add = app.session.current().and_then(|r| r.title).is_some();
    if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
        app.add_current();
    }
}
