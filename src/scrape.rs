// src/scrape.rs
use crate::{
    config::options::Source,
    core::net,
    data::FilmTable,
    error::{Error, Result},
    progress::Progress,
    specs::films,
};

/// Steps reported through `Progress`: fetch, parse.
pub const STEPS: usize = 2;

/// Fetch the listing once and extract it. An empty result is `Error::NoFilms`.
pub fn collect_films(
    source: &Source,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FilmTable> {
    let origin = source.describe();
    logf!("Scrape: Begin {}", origin);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(STEPS);
        p.log(&format!("Fetching {origin}…"));
    }

    let html = match net::load_source(source) {
        Ok(h) => h,
        Err(e) => {
            loge!("Scrape: Fetch failed {}: {}", origin, e);
            if let Some(p) = progress.as_deref_mut() { p.finish(); }
            return Err(e);
        }
    };
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&format!("fetched {} bytes", html.len()));
    }

    let table = films::extract(&html);
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&format!("parsed {} films", table.len()));
        p.finish();
    }

    if table.is_empty() {
        loge!("Scrape: No film rows in {} ({} bytes)", origin, html.len());
        return Err(Error::NoFilms(origin));
    }

    logf!("Scrape: OK {} films from {}", table.len(), origin);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.calls.push(format!("begin {total}")); }
        fn log(&mut self, _msg: &str) { self.calls.push(s!("log")); }
        fn item_done(&mut self, detail: &str) { self.calls.push(s!(detail)); }
        fn finish(&mut self) { self.calls.push(s!("finish")); }
    }

    const PAGE: &str = r#"<table><tbody class="criterion-channel__tbody">
        <tr class="criterion-channel__tr" data-href="https://films.example/m">
          <td class="criterion-channel__td--title">M</td>
        </tr></tbody></table>"#;

    #[test]
    fn reports_each_step_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("listing.html");
        fs::write(&path, PAGE).unwrap();

        let mut rec = Recorder::default();
        let table = collect_films(&Source::File(path), Some(&mut rec)).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            rec.calls,
            [
                "begin 2".to_string(),
                s!("log"),
                format!("fetched {} bytes", PAGE.len()),
                s!("parsed 1 films"),
                s!("finish"),
            ]
        );
    }

    #[test]
    fn failed_fetch_still_finishes() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.html");

        let mut rec = Recorder::default();
        let res = collect_films(&Source::File(missing), Some(&mut rec));
        assert!(matches!(res, Err(Error::Io(_))));
        assert_eq!(rec.calls, ["begin 2", "log", "finish"]);
    }

    #[test]
    fn empty_page_is_no_films() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.html");
        fs::write(&path, "<p>down for maintenance</p>").unwrap();

        let mut rec = Recorder::default();
        let res = collect_films(&Source::File(path), Some(&mut rec));
        assert!(matches!(res, Err(Error::NoFilms(_))));
        assert!(rec.calls.contains(&s!("parsed 0 films")));
    }
}
