// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use criterion_pls::{cli, config::state::AppState, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    // Same source/store flags as the CLI; the command word is ignored here.
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let state = AppState { options: args.options, ..AppState::default() };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
