// Store module: keeps the whole restaurant list in a single JSON file.
// The file is read once at startup and rewritten in full after every
// change. Writes are plain `fs::write` calls and are not atomic.

use crate::error::StoreError;
use crate::model::Restaurant;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name used by the binary, relative to the working directory.
pub const DATA_FILE: &str = "restaurantes.json";

/// File-backed storage for the restaurant list.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record from the data file.
    ///
    /// A missing file yields an empty list. So does a file whose contents
    /// cannot be parsed as a list of restaurants: corrupt data is dropped,
    /// not reported, and the next save overwrites it. Only I/O failures on
    /// an existing file are returned as errors.
    pub fn load(&self) -> Result<Vec<Restaurant>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_slice::<Vec<Restaurant>>(&bytes) {
            Ok(records) => {
                debug!(path = %self.path.display(), count = records.len(), "loaded restaurants");
                Ok(records)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file is corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replace the data file with `records`, pretty-printed with four-space
    /// indentation. Non-ASCII text is written as-is.
    pub fn save(&self, records: &[Restaurant]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;

        fs::write(&self.path, &buf).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "saved restaurants");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join(DATA_FILE));
        (dir, store)
    }

    fn sample() -> Vec<Restaurant> {
        let mut open = Restaurant::new("pizza place", "italian");
        open.toggle();
        vec![
            Restaurant::new("burger king", "fast food"),
            open,
            Restaurant::new("burger king", "grill"),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let (_dir, store) = temp_store();
        let records = sample();
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, store) = temp_store();
        store.save(&sample()).unwrap();
        let fewer = vec![Restaurant::new("only", "one")];
        store.save(&fewer).unwrap();
        assert_eq!(store.load().unwrap(), fewer);
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "[{\"name\": \"Burger").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_or_wrongly_shaped_file_loads_empty() {
        let (_dir, store) = temp_store();

        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), "{\"name\": \"X\"}").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn saved_document_is_indented_and_keeps_non_ascii() {
        let (_dir, store) = temp_store();
        store
            .save(&[Restaurant::new("café são joão", "padaria")])
            .unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        let expected = "[\n    {\n        \"name\": \"Café São João\",\n        \"category\": \"Padaria\",\n        \"active\": false\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_list_saves_as_empty_array() {
        let (_dir, store) = temp_store();
        store.save(&[]).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nope").join(DATA_FILE));
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
