// src/gui/app.rs
use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    error::{Error, Result},
    log, picker,
    progress::LogProgress,
    scrape,
    session::Session,
    store::{FileStorage, SavedList},
};

/// Fetch and parse the listing, then open the window.
/// The fetch happens once, before any UI exists; failure aborts startup.
pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<()> {
    let opts = &state.options;
    log::init(&opts.store_dir);
    let films = scrape::collect_films(&opts.source, Some(&mut LogProgress))?;
    let saved = SavedList::load(Box::new(FileStorage::new(&opts.store_dir)))?;
    let session = Session::new(films, saved, picker::make_rng(opts.seed));

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(state, session)))
        }),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}

pub struct App {
    pub state: AppState,
    // single source of truth (UI thread only)
    pub session: Session,
    pub status: String,
}

impl App {
    pub fn new(state: AppState, mut session: Session) -> Self {
        session.randomize();
        logf!(
            "Init: films={}, saved={}",
            session.films().len(),
            session.saved().len()
        );
        let status = format!("{} films", session.films().len());
        Self { state, session, status }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn randomize(&mut self) {
        let headline = self.session.randomize().map(|r| r.headline());
        logf!("UI: Randomize → {:?}", headline);
        let n = self.session.films().len();
        self.status(format!("{n} films"));
    }

    pub fn add_current(&mut self) {
        match self.session.add_current() {
            Ok(true) => self.status("Saved"),
            Ok(false) => self.status("Already saved"),
            Err(e) => {
                loge!("UI: Save failed: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }

    pub fn remove_saved(&mut self, title: &str) {
        match self.session.remove(title) {
            Ok(_) => self.status(format!("Removed {title}")),
            Err(e) => {
                loge!("UI: Remove failed: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.randomize();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            crate::gui::components::header::draw(ui, self);
        });

        if self.state.gui.show_saved {
            egui::SidePanel::right("saved")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    crate::gui::components::saved_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::pick_panel::draw(ui, self);
        });
    }
}
