// src/store.rs
//! Durable key-value slot and the saved-films list kept in it.
//!
//! The saved list lives under one fixed key (`savedMovies`) as a JSON array of
//! titles. Every mutation rewrites the whole array.

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use crate::config::consts::SAVED_KEY;
use crate::error::Result;

/// A string-valued key-value slot, shaped like browser local storage.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(join!(key, ".json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write beside the target and rename so a crash never leaves half a file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// In-process storage. Clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(s!(key), s!(value));
        Ok(())
    }
}

/// Ordered, duplicate-free list of saved film titles, backed by a `Storage`.
pub struct SavedList {
    titles: Vec<String>,
    storage: Box<dyn Storage>,
}

impl SavedList {
    /// Read the saved key. Missing → empty list; malformed → `Error::Json`.
    pub fn load(storage: Box<dyn Storage>) -> Result<Self> {
        let titles = match storage.get(SAVED_KEY)? {
            Some(text) => serde_json::from_str::<Vec<String>>(&text)?,
            None => Vec::new(),
        };
        logf!("Store: Loaded {} saved title(s)", titles.len());
        Ok(Self { titles, storage })
    }

    pub fn titles(&self) -> &[String] { &self.titles }
    pub fn len(&self) -> usize { self.titles.len() }
    pub fn is_empty(&self) -> bool { self.titles.is_empty() }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Append `title` unless already saved. Returns whether the list changed.
    pub fn add(&mut self, title: &str) -> Result<bool> {
        if self.contains(title) {
            logd!("Store: '{}' already saved", title);
            return Ok(false);
        }
        let mut next = self.titles.clone();
        next.push(s!(title));
        self.commit(next)?;
        logf!("Store: Saved '{}' ({} total)", title, self.titles.len());
        Ok(true)
    }

    /// Drop every entry equal to `title`. Returns whether the list changed.
    pub fn remove(&mut self, title: &str) -> Result<bool> {
        let next: Vec<String> = self.titles.iter().filter(|t| *t != title).cloned().collect();
        let changed = next.len() != self.titles.len();
        self.commit(next)?;
        if changed {
            logf!("Store: Removed '{}' ({} left)", title, self.titles.len());
        }
        Ok(changed)
    }

    // Persist first; memory only follows a successful write.
    fn commit(&mut self, next: Vec<String>) -> Result<()> {
        let text = serde_json::to_string(&next)?;
        self.storage.set(SAVED_KEY, &text)?;
        self.titles = next;
        Ok(())
    }
}
