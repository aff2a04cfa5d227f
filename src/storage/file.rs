use super::{Storage, StorageError};
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};
use tracing::{debug, warn};
use ulid::Ulid;

type Items = BTreeMap<String, String>;

/// Storage backed by a single JSON object file.
///
/// Reads always go to disk. Writes are read-modify-write under a process-local
/// lock and land through a temp file + rename, so a reader never observes a
/// half-written file. Across processes the last writer wins.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Items {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Items::new(),
            Err(err) => {
                warn!("Failed to read storage file {}: {}", self.path.display(), err);
                return Items::new();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            warn!(
                "Ignoring unreadable storage file {}: {}",
                self.path.display(),
                err
            );
            Items::new()
        })
    }

    fn write_all(&self, items: &Items) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "storage".into(), |name| name.to_string_lossy());
        let tmp = self
            .path
            .with_file_name(format!(".{file_name}.{}.tmp", Ulid::new()));

        fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        debug!("storage file updated: {}", self.path.display());
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_all();
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut items = self.read_all();
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write_all(&items)
    }
}
