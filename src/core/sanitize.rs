// src/core/sanitize.rs

use crate::config::consts::{POSTER_QUERY, POSTER_QUERY_CUT};

/// Trimmed `s`, or `None` when nothing is left. Inner whitespace is kept as is.
pub fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// Swap the listing's thumbnail query for a 720p crop.
pub fn poster_url(src: &str) -> String {
    let base = src.split(POSTER_QUERY_CUT).next().unwrap_or(src);
    join!(base, POSTER_QUERY)
}

/// Countries are rendered with a trailing comma in the listing table.
pub fn country_label(s: &str) -> &str {
    s.trim().trim_end_matches(',').trim_end()
}
