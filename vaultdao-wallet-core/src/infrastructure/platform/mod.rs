//! Platform-specific storage
//!
//! The token registry never touches a concrete store directly; it is handed a
//! [`PlatformStorage`] implementation. Two are provided:
//!
//! - [`FileStorage`]: one JSON file per key under the user's data directory
//! - [`MemoryStorage`]: an in-process map, used by tests and embedders

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::shared::constants::{FALLBACK_STORAGE_DIR, STORAGE_DIR_NAME, STORAGE_FILE_EXTENSION};
use crate::shared::error::WalletError;

/// Key/value blob storage
pub trait PlatformStorage {
    /// Store data, replacing any prior value
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError>;

    /// Retrieve data; `Ok(None)` when the key was never written
    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError>;

    /// Delete data; deleting a missing key is not an error
    fn delete(&self, key: &str) -> Result<(), WalletError>;

    /// Check if data exists
    fn exists(&self, key: &str) -> Result<bool, WalletError>;

    /// List all stored keys
    fn list_keys(&self) -> Result<Vec<String>, WalletError>;
}

/// Keys double as file names, so they are restricted to `[A-Za-z0-9_-]`.
pub fn validate_storage_key(key: &str) -> Result<(), WalletError> {
    if key.is_empty() {
        return Err(WalletError::validation("Storage key cannot be empty"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(WalletError::validation(format!(
            "Storage key '{}' may only contain letters, digits, '_' and '-'",
            key
        )));
    }
    Ok(())
}

/// In-memory storage
#[derive(Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, WalletError> {
        self.data
            .lock()
            .map_err(|_| WalletError::internal("Memory storage lock poisoned"))
    }
}

impl PlatformStorage for MemoryStorage {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError> {
        self.lock()?.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), WalletError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, WalletError> {
        Ok(self.lock()?.contains_key(key))
    }

    fn list_keys(&self) -> Result<Vec<String>, WalletError> {
        let mut keys: Vec<String> = self.lock()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// File-backed storage, one `<key>.json` file per key
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at the OS data directory
    pub fn new() -> Result<Self, WalletError> {
        Self::with_base_dir(Self::default_base_dir())
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Result<Self, WalletError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        log::debug!("File storage rooted at {}", base_dir.display());
        Ok(Self { base_dir })
    }

    pub fn default_base_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(STORAGE_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_STORAGE_DIR))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    // Helper: Get file path for a given key
    fn file_path(&self, key: &str) -> Result<PathBuf, WalletError> {
        validate_storage_key(key)?;
        Ok(self
            .base_dir
            .join(format!("{}.{}", key, STORAGE_FILE_EXTENSION)))
    }
}

// Helper: Create `path` owner-only and flush `data` to disk
fn write_synced(path: &Path, data: &[u8]) -> Result<(), WalletError> {
    let mut file = File::create(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}

impl PlatformStorage for FileStorage {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError> {
        let path = self.file_path(key)?;
        let tmp_path = path.with_extension(format!("{}.tmp", STORAGE_FILE_EXTENSION));

        // Write the sibling first so a failed write leaves the old value in place
        let result = write_synced(&tmp_path, data).and_then(|()| {
            fs::rename(&tmp_path, &path).map_err(|e| {
                WalletError::storage(format!("Failed to replace {}: {}", path.display(), e))
            })
        });
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError> {
        let path = self.file_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, key: &str) -> Result<(), WalletError> {
        let path = self.file_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, WalletError> {
        Ok(self.file_path(key)?.is_file())
    }

    fn list_keys(&self) -> Result<Vec<String>, WalletError> {
        let mut keys = vec![];
        for entry in fs::read_dir(&self.base_dir)?.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(STORAGE_FILE_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                keys.push(name.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
