// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. A spec knows *where the ground truth
//! lives in the HTML* for one page and how to pull it out.
//!
//! ## What lives here
//! - **Pure HTML parsing** over a `scraper::Html` document tree.
//! - **Selector choice**: the CSS paths that define the page's shape.
//! - **Light shaping** of results into a `data::FilmTable`.
//!
//! ## What does **not** live here
//! - **Persistence** of the saved list (`store`).
//! - **Randomness** (`picker`) and **UI state** (`session`, `gui`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect_films → core::net::load_source
//!                                   ↘ specs::films::extract → FilmTable
//! ```
//!
//! ## Conventions & invariants
//! - Cells are read **per row**, so a missing cell yields `None` in that row only
//!   and never shifts later rows.
//! - Extraction itself never fails; an empty table is how layout drift shows up.
//!   The scrape layer turns that into `Error::NoFilms`.
//!
//! ## Testing notes
//! - Specs are tested **offline** against a captured fixture (`tests/fixtures`).
pub mod films;
