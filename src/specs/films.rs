// src/specs/films.rs
//! Scraping *spec* for the Criterion Channel listing (`films.criterionchannel.com`).
//!
//! The page is one big table:
//!
//! ```text
//! tbody.criterion-channel__tbody
//!   tr.criterion-channel__tr[data-href=<detail url>]
//!     td.criterion-channel__td--img > .criterion-channel__film-img-wrap > img.criterion-channel__film-img[src]
//!     td.criterion-channel__td--title
//!     td.criterion-channel__td--director
//!     td.criterion-channel__td--country
//!     td.criterion-channel__td--year
//! ```

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::non_empty;
use crate::data::{FilmRow, FilmTable};
use crate::error::{Error, Result};

pub const ROW: &str = ".criterion-channel__tbody > .criterion-channel__tr";
pub const TITLE: &str = ".criterion-channel__tr > .criterion-channel__td--title";
pub const DIRECTOR: &str = ".criterion-channel__tr > .criterion-channel__td--director";
pub const COUNTRY: &str = ".criterion-channel__tr > .criterion-channel__td--country";
pub const YEAR: &str = ".criterion-channel__tr > .criterion-channel__td--year";
pub const IMAGE: &str = ".criterion-channel__tr > .criterion-channel__td--img \
    > .criterion-channel__film-img-wrap > .criterion-channel__film-img";

pub const URL_ATTR: &str = "data-href";
pub const IMAGE_ATTR: &str = "src";

/// Compiled selectors for one listing layout.
pub struct Selectors {
    row: Selector,
    title: Selector,
    director: Selector,
    country: Selector,
    year: Selector,
    image: Selector,
}

impl Selectors {
    pub fn parse() -> Result<Self> {
        Ok(Self {
            row: compile(ROW)?,
            title: compile(TITLE)?,
            director: compile(DIRECTOR)?,
            country: compile(COUNTRY)?,
            year: compile(YEAR)?,
            image: compile(IMAGE)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

static SELECTORS: LazyLock<Result<Selectors>> = LazyLock::new(Selectors::parse);

/// Parse a listing page into an aligned film table.
/// Zero matching rows gives an empty table.
pub fn extract(html: &str) -> FilmTable {
    match SELECTORS.as_ref() {
        Ok(sel) => extract_with(&Html::parse_document(html), sel),
        Err(e) => {
            loge!("Extract: {}", e);
            FilmTable::new()
        }
    }
}

pub fn extract_with(doc: &Html, sel: &Selectors) -> FilmTable {
    let rows: Vec<ElementRef<'_>> = doc.select(&sel.row).collect();
    let mut table = FilmTable::with_capacity(rows.len());

    for row in rows {
        table.push_row(FilmRow {
            title: cell_text(row, &sel.title),
            director: cell_text(row, &sel.director),
            country: cell_text(row, &sel.country),
            year: cell_text(row, &sel.year),
            url: attr(row, URL_ATTR),
            image: row
                .select(&sel.image)
                .next()
                .and_then(|img| attr(img, IMAGE_ATTR)),
        });
    }

    logd!("Extract: {} film rows", table.len());
    table
}

/// Trimmed text of the first matching cell inside `row`.
fn cell_text(row: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let cell = row.select(sel).next()?;
    let text: String = cell.text().collect();
    non_empty(&text)
}

fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).and_then(non_empty)
}
