// src/config/consts.rs

// Net config
pub const LISTING_URL: &str = "https://films.criterionchannel.com/";
pub const USER_AGENT: &str = concat!("criterion_pls/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const SAVED_KEY: &str = "savedMovies";
pub const LOG_FILE: &str = "debug.log";

// Poster rewrite: drop the site's own resize query, request a 720p crop
pub const POSTER_QUERY_CUT: &str = "?auto";
pub const POSTER_QUERY: &str = "?auto=format%2Ccompress&fit=crop&h=720&q=75&w=1280";

// Window
pub const APP_TITLE: &str = "Criterion Pls";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;
