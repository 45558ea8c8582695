// src/core/net.rs

// Blocking HTTPS GET. One shot: no retries, the caller decides what a failure means.

use std::fs;
use std::path::Path;

use crate::config::consts::USER_AGENT;
use crate::config::options::Source;
use crate::error::Result;

pub fn http_get(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    logd!("Net: GET {} → {}", url, resp.status());
    Ok(resp.text()?)
}

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Load the raw listing HTML from wherever the options point.
pub fn load_source(source: &Source) -> Result<String> {
    match source {
        Source::Remote(url) => http_get(url),
        Source::File(path) => read_file(path),
    }
}
