// File backed implementation of the KeyValueStore port.
//
// Responsibilities
// - One file per key inside a directory created on open.
// - Replace values atomically: write a sibling temp file, then rename over the old one.

use crate::core::ports::{KeyValueStore, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
                _ => '_',
            })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable stored item");
                None
            }
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "stored item");
        Ok(())
    }
}

#[cfg(test)]
mod file_key_value_store_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn before_each() -> (TempDir, FileKeyValueStore) {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("storage")).unwrap();
        (dir, store)
    }

    #[rstest]
    fn it_should_persist_across_instances(before_each: (TempDir, FileKeyValueStore)) {
        let (_dir, store) = before_each;
        store.set_item("kampuspot_swipes_v1", "[]").unwrap();
        let reopened = FileKeyValueStore::open(store.dir()).unwrap();
        assert_eq!(reopened.get_item("kampuspot_swipes_v1").as_deref(), Some("[]"));
    }

    #[rstest]
    fn it_should_return_none_for_unknown_keys(before_each: (TempDir, FileKeyValueStore)) {
        let (_dir, store) = before_each;
        assert_eq!(store.get_item("missing"), None);
    }

    #[rstest]
    fn it_should_replace_values_without_leaving_temp_files(
        before_each: (TempDir, FileKeyValueStore),
    ) {
        let (_dir, store) = before_each;
        store.set_item("a/b", "first").unwrap();
        store.set_item("a/b", "second").unwrap();
        assert_eq!(store.get_item("a/b").as_deref(), Some("second"));
        let names: Vec<String> = fs::read_dir(store.dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_b.json".to_string()]);
    }
}
