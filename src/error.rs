// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stored data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid selector `{0}`")]
    Selector(String),

    #[error("No film rows found at {0}; the listing layout may have changed")]
    NoFilms(String),

    #[error("GUI error: {0}")]
    Gui(String),

    #[error("{0}")]
    Usage(String),
}

// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;
