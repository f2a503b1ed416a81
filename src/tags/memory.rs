use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{TagField, TagHandle, TagStore};
use crate::error::TagError;

type Fields = BTreeMap<TagField, String>;
type Shared = Arc<Mutex<HashMap<PathBuf, Fields>>>;

/// In-memory `TagStore` keyed by path. Unknown paths open with no fields.
#[derive(Default, Clone)]
pub struct MemoryStore {
    files: Shared,
    unreadable: Arc<Mutex<HashSet<PathBuf>>>,
    unwritable: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, path: &Path, field: TagField, value: &str) {
        self.files
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default()
            .insert(field, value.to_string());
    }

    pub fn get(&self, path: &Path, field: TagField) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .and_then(|f| f.get(&field).cloned())
    }

    pub fn fail_reads(&self, path: &Path) {
        self.unreadable.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn fail_writes(&self, path: &Path) {
        self.unwritable.lock().unwrap().insert(path.to_path_buf());
    }
}

impl TagStore for MemoryStore {
    fn open(&self, path: &Path) -> Result<Box<dyn TagHandle>, TagError> {
        if self.unreadable.lock().unwrap().contains(path) {
            return Err(TagError::Read {
                path: path.to_path_buf(),
                message: "unreadable test file".to_string(),
            });
        }
        let fields = self
            .files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_default();
        Ok(Box::new(MemoryHandle {
            path: path.to_path_buf(),
            fields,
            store: self.clone(),
        }))
    }
}

struct MemoryHandle {
    path: PathBuf,
    fields: Fields,
    store: MemoryStore,
}

impl TagHandle for MemoryHandle {
    fn read_field(&self, field: TagField) -> Option<String> {
        self.fields
            .get(&field)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn write_field(&mut self, field: TagField, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    fn persist(&mut self) -> Result<(), TagError> {
        if self.store.unwritable.lock().unwrap().contains(&self.path) {
            return Err(TagError::Write {
                path: self.path.clone(),
                message: "read-only test file".to_string(),
            });
        }
        self.store
            .files
            .lock()
            .unwrap()
            .insert(self.path.clone(), self.fields.clone());
        Ok(())
    }
}
