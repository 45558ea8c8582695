// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod gui;
pub mod picker;
pub mod progress;
pub mod scrape;
pub mod session;
pub mod specs;
pub mod store;

pub use error::{Error, Result};
