// src/session.rs
//
// Single owner of everything the UI mutates: the scraped table, the current
// pick, and the saved list. GUI and CLI both drive it through these methods.

use rand::rngs::StdRng;

use crate::{
    data::{FilmRecord, FilmTable},
    error::Result,
    picker,
    store::SavedList,
};

pub struct Session {
    films: FilmTable,
    selection: Option<usize>,
    saved: SavedList,
    rng: StdRng,
}

impl Session {
    pub fn new(films: FilmTable, saved: SavedList, rng: StdRng) -> Self {
        Self { films, selection: None, saved, rng }
    }

    pub fn films(&self) -> &FilmTable { &self.films }
    pub fn saved(&self) -> &SavedList { &self.saved }

    /// Draw a fresh pick. Stays `None` when the table is empty.
    pub fn randomize(&mut self) -> Option<FilmRecord<'_>> {
        self.selection = picker::pick_index(self.films.len(), &mut self.rng);
        match self.selection {
            Some(i) => logd!("Session: Picked #{} of {}", i, self.films.len()),
            None => logd!("Session: Nothing to pick"),
        }
        self.current()
    }

    pub fn current(&self) -> Option<FilmRecord<'_>> {
        self.selection.and_then(|i| self.films.get(i))
    }

    /// Save the current pick's title. `Ok(false)` when there is no pick,
    /// the pick has no title, or it is already saved.
    pub fn add_current(&mut self) -> Result<bool> {
        let title = match self.current().and_then(|r| r.title) {
            Some(t) => s!(t),
            None => return Ok(false),
        };
        self.saved.add(&title)
    }

    /// Save a title by name, e.g. one typed on the command line.
    pub fn add(&mut self, title: &str) -> Result<bool> {
        self.saved.add(title)
    }

    pub fn remove(&mut self, title: &str) -> Result<bool> {
        self.saved.remove(title)
    }
}
