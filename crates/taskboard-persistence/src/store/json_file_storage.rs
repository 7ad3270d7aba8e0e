use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStorage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskboard_core::{TaskboardError, TaskboardResult};
use tokio::sync::{Mutex, MutexGuard};

pub const STORAGE_FORMAT_VERSION: u32 = 1;

/// On-disk layout of a storage file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageEnvelope {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub items: serde_json::Map<String, serde_json::Value>,
}

impl StorageEnvelope {
    pub fn empty() -> Self {
        Self {
            version: STORAGE_FORMAT_VERSION,
            saved_at: Utc::now(),
            items: serde_json::Map::new(),
        }
    }

    pub fn to_json_string(&self) -> TaskboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// File-backed key-value storage.
///
/// The whole file is loaded on first use and kept in memory; every write
/// rewrites the file atomically.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    items: Mutex<Option<serde_json::Map<String, serde_json::Value>>>,
}

impl JsonFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            items: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> TaskboardResult<serde_json::Map<String, serde_json::Value>> {
        let Some(bytes) = AtomicWriter::read_if_exists(&self.path).await? else {
            return Ok(serde_json::Map::new());
        };
        let envelope: StorageEnvelope = serde_json::from_slice(&bytes)?;
        if envelope.version != STORAGE_FORMAT_VERSION {
            return Err(TaskboardError::Serialization(format!(
                "Unsupported storage format version: {}",
                envelope.version
            )));
        }
        tracing::info!(
            "Loaded {} keys from {}",
            envelope.items.len(),
            self.path.display()
        );
        Ok(envelope.items)
    }

    async fn flush(&self, items: &serde_json::Map<String, serde_json::Value>) -> TaskboardResult<()> {
        let envelope = StorageEnvelope {
            items: items.clone(),
            ..StorageEnvelope::empty()
        };
        let bytes = envelope.to_json_string()?.into_bytes();
        AtomicWriter::write_atomic(&self.path, &bytes).await?;
        tracing::debug!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    async fn loaded(
        &self,
    ) -> TaskboardResult<MutexGuard<'_, Option<serde_json::Map<String, serde_json::Value>>>> {
        let mut guard = self.items.lock().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        Ok(guard)
    }

    async fn read<R>(
        &self,
        f: impl FnOnce(&serde_json::Map<String, serde_json::Value>) -> R,
    ) -> TaskboardResult<R> {
        let guard = self.loaded().await?;
        let items = guard
            .as_ref()
            .ok_or_else(|| TaskboardError::Internal("storage not loaded".to_string()))?;
        Ok(f(items))
    }

    /// Applies `f` to a copy of the cached items. When `f` reports a change
    /// the copy is flushed, and it replaces the cache only once it is on disk.
    async fn update(
        &self,
        f: impl FnOnce(&mut serde_json::Map<String, serde_json::Value>) -> bool,
    ) -> TaskboardResult<()> {
        let mut guard = self.loaded().await?;
        let mut items = guard
            .as_ref()
            .ok_or_else(|| TaskboardError::Internal("storage not loaded".to_string()))?
            .clone();
        if f(&mut items) {
            self.flush(&items).await?;
            *guard = Some(items);
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for JsonFileStorage {
    async fn get_item(&self, key: &str) -> TaskboardResult<Option<serde_json::Value>> {
        self.read(|items| items.get(key).cloned()).await
    }

    async fn set_item(&self, key: &str, value: serde_json::Value) -> TaskboardResult<()> {
        self.update(|items| {
            items.insert(key.to_string(), value);
            true
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> TaskboardResult<()> {
        self.update(|items| items.remove(key).is_some()).await
    }
}
