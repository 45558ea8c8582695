// tests/saved_store.rs
//
// SavedList over the file-backed slot.
//
use std::fs;

use criterion_pls::store::{FileStorage, SavedList, Storage};
use criterion_pls::Error;

fn open(dir: &std::path::Path) -> SavedList {
    SavedList::load(Box::new(FileStorage::new(dir))).unwrap()
}

#[test]
fn round_trip_keeps_order() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let mut list = open(tmp.path());
        for t in ["Stalker", "Tokyo Story", "M", "Cléo from 5 to 7"] {
            list.add(t).unwrap();
        }
        list.remove("M").unwrap();
    }
    let reloaded = open(tmp.path());
    assert_eq!(reloaded.titles(), ["Stalker", "Tokyo Story", "Cléo from 5 to 7"]);
}

#[test]
fn slot_is_a_json_array_under_the_fixed_key() {
    let tmp = tempfile::tempdir().unwrap();
    let mut list = open(tmp.path());
    list.add("Stalker").unwrap();

    let path = FileStorage::new(tmp.path()).path_for("savedMovies");
    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text, r#"["Stalker"]"#);
}

#[test]
fn missing_store_dir_is_created_on_first_write() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("store");
    let mut list = open(&dir);
    assert!(list.is_empty());
    list.add("M").unwrap();
    assert!(dir.join("savedMovies.json").exists());
    assert!(!dir.join("savedMovies.json.tmp").exists());
}

#[test]
fn duplicate_add_and_absent_remove_keep_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let mut list = open(tmp.path());
    list.add("X").unwrap();
    list.add("X").unwrap();
    assert_eq!(list.titles(), ["X"]);
    assert!(!list.remove("Y").unwrap());
    assert_eq!(open(tmp.path()).titles(), ["X"]);
}

#[test]
fn corrupt_file_fails_to_load() {
    let tmp = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(tmp.path());
    storage.set("savedMovies", "[\"unterminated").unwrap();
    let res = SavedList::load(Box::new(storage));
    assert!(matches!(res, Err(Error::Json(_))));
}
