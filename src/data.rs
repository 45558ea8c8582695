// src/data.rs
//
// Columnar film table produced by the extractor.
//
// - FilmTable: six aligned columns, one entry per listing row.
//              Only `push_row` grows it, so the columns never drift apart.
// - FilmRecord: borrowed view of one row, handed to the UI and CLI.

/// One scraped row, owned. Fields are `None` when the cell was missing or blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilmRow {
    pub title: Option<String>,
    pub director: Option<String>,
    pub country: Option<String>,
    pub year: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilmTable {
    titles: Vec<Option<String>>,
    directors: Vec<Option<String>>,
    countries: Vec<Option<String>>,
    years: Vec<Option<String>>,
    urls: Vec<Option<String>>,
    images: Vec<Option<String>>,
}

impl FilmTable {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            titles: Vec::with_capacity(n),
            directors: Vec::with_capacity(n),
            countries: Vec::with_capacity(n),
            years: Vec::with_capacity(n),
            urls: Vec::with_capacity(n),
            images: Vec::with_capacity(n),
        }
    }

    /// Append one row across all six columns.
    pub fn push_row(&mut self, row: FilmRow) {
        self.titles.push(row.title);
        self.directors.push(row.director);
        self.countries.push(row.country);
        self.years.push(row.year);
        self.urls.push(row.url);
        self.images.push(row.image);
    }

    #[inline] pub fn len(&self) -> usize { self.titles.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.titles.is_empty() }

    pub fn titles(&self) -> &[Option<String>] { &self.titles }
    pub fn directors(&self) -> &[Option<String>] { &self.directors }
    pub fn countries(&self) -> &[Option<String>] { &self.countries }
    pub fn years(&self) -> &[Option<String>] { &self.years }
    pub fn urls(&self) -> &[Option<String>] { &self.urls }
    pub fn images(&self) -> &[Option<String>] { &self.images }

    pub fn get(&self, i: usize) -> Option<FilmRecord<'_>> {
        if i >= self.len() { return None; }
        Some(FilmRecord {
            index: i,
            title: self.titles[i].as_deref(),
            director: self.directors[i].as_deref(),
            country: self.countries[i].as_deref(),
            year: self.years[i].as_deref(),
            url: self.urls[i].as_deref(),
            image: self.images[i].as_deref(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = FilmRecord<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// First row whose title matches exactly.
    pub fn find_title(&self, title: &str) -> Option<FilmRecord<'_>> {
        self.titles
            .iter()
            .position(|t| t.as_deref() == Some(title))
            .and_then(|i| self.get(i))
    }
}

impl FromIterator<FilmRow> for FilmTable {
    fn from_iter<I: IntoIterator<Item = FilmRow>>(iter: I) -> Self {
        let mut table = FilmTable::new();
        for row in iter { table.push_row(row); }
        table
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilmRecord<'a> {
    pub index: usize,
    pub title: Option<&'a str>,
    pub director: Option<&'a str>,
    pub country: Option<&'a str>,
    pub year: Option<&'a str>,
    pub url: Option<&'a str>,
    pub image: Option<&'a str>,
}

impl FilmRecord<'_> {
    /// "Title (Year)", or just the title when the year is missing.
    pub fn headline(&self) -> String {
        let title = self.title.unwrap_or("Untitled");
        match self.year {
            Some(y) => format!("{title} ({y})"),
            None => s!(title),
        }
    }

    /// "Director — Country", skipping whichever side is missing.
    pub fn byline(&self) -> String {
        let country = self.country.map(crate::core::sanitize::country_label);
        match (self.director, country) {
            (Some(d), Some(c)) if !c.is_empty() => format!("{d} — {c}"),
            (Some(d), _) => s!(d),
            (None, Some(c)) => s!(c),
            (None, None) => s!(),
        }
    }

    /// Poster URL with the 720p crop query.
    pub fn poster(&self) -> Option<String> {
        self.image.map(crate::core::sanitize::poster_url)
    }
}
