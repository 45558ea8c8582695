// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: Source,
    pub store_dir: PathBuf,
    /// Fixed RNG seed for reproducible draws; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            store_dir: PathBuf::from(STORE_DIR),
            seed: None,
        }
    }
}

/// Where the listing HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Remote(s!(LISTING_URL))
    }
}

impl Source {
    /// Human-readable origin, used in logs and errors.
    pub fn describe(&self) -> String {
        match self {
            Source::Remote(url) => url.clone(),
            Source::File(path) => path.display().to_string(),
        }
    }
}
