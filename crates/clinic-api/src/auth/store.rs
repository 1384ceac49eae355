use shared_types::AppError;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Key of the durable slot holding the serialized identity.
pub const SESSION_KEY: &str = "auth_user";

/// A single durable key-value slot for the session.
///
/// Failures are reported but the session treats them as non-fatal.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>, AppError>;
    fn save(&self, value: &str) -> Result<(), AppError>;
    fn clear(&self) -> Result<(), AppError>;
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn load(&self) -> Result<Option<String>, AppError> {
        (**self).load()
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        (**self).save(value)
    }

    fn clear(&self) -> Result<(), AppError> {
        (**self).clear()
    }
}

/// In-process slot. Clones share the same slot, which lets a second
/// `Session` built from a clone behave like a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `raw`, as if written by an earlier run.
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, AppError> {
        self.slot
            .lock()
            .map_err(|_| AppError::storage("session slot lock poisoned"))
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        *self.lock()? = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self.lock()? = None;
        Ok(())
    }
}

/// Slot backed by `<dir>/auth_user.json`, used by the desktop build.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{SESSION_KEY}.json")),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::storage(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
        std::fs::write(&self.path, value)
            .map_err(|e| AppError::storage(format!("Failed to write {}: {}", self.path.display(), e)))
    }

    fn clear(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
