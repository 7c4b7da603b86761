use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use portal_core::model::{AssignmentKey, NoteKey, NotificationSettings};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::repository::{
    AssignmentRepository, NoteRepository, SettingsRepository, Storage, StorageError,
};

mod snapshot;

use snapshot::{SnapshotKey, load_map, write_atomic, write_map};

pub const NOTES_FILE: &str = "notes.json";
pub const ASSIGNMENTS_FILE: &str = "assignment_submissions.json";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JsonInitError {
    #[error("cannot create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One JSON file mirrored by an in-memory map.
///
/// The lock is held across the write so the file always reflects the latest
/// mutation.
struct SnapshotStore<K> {
    path: PathBuf,
    entries: Mutex<BTreeMap<K, String>>,
}

impl<K: SnapshotKey> SnapshotStore<K> {
    async fn open(path: PathBuf) -> Self {
        let entries = load_map(&path).await;
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    async fn get(&self, key: &K) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    async fn list(&self) -> Vec<(K, String)> {
        self.entries
            .lock()
            .await
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Apply `mutate` to the map, then rewrite the file. The in-memory change
    /// stays even if the write fails.
    async fn update<R>(
        &self,
        mutate: impl FnOnce(&mut BTreeMap<K, String>) -> R + Send,
    ) -> Result<R, StorageError> {
        let mut entries = self.entries.lock().await;
        let outcome = mutate(&mut entries);
        if let Err(err) = write_map(&self.path, &entries).await {
            log::warn!("could not persist {}: {err}", self.path.display());
            return Err(err);
        }
        Ok(outcome)
    }
}

/// File-backed repository: one JSON snapshot per concern inside a data directory.
#[derive(Clone)]
pub struct JsonFileRepository {
    notes: Arc<SnapshotStore<NoteKey>>,
    submissions: Arc<SnapshotStore<AssignmentKey>>,
    settings_path: PathBuf,
    settings: Arc<Mutex<Option<NotificationSettings>>>,
}

impl JsonFileRepository {
    /// Create the data directory if needed and load every snapshot once.
    ///
    /// # Errors
    ///
    /// Returns `JsonInitError` if the directory cannot be created. Missing or
    /// malformed files are not errors; they load as empty.
    pub async fn open(data_dir: &Path) -> Result<Self, JsonInitError> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|source| JsonInitError::CreateDir {
                path: data_dir.to_path_buf(),
                source,
            })?;

        let notes = SnapshotStore::open(data_dir.join(NOTES_FILE)).await;
        let submissions = SnapshotStore::open(data_dir.join(ASSIGNMENTS_FILE)).await;
        let settings_path = data_dir.join(SETTINGS_FILE);
        let settings = load_settings(&settings_path).await;

        log::info!("opened portal data in {}", data_dir.display());
        Ok(Self {
            notes: Arc::new(notes),
            submissions: Arc::new(submissions),
            settings_path,
            settings: Arc::new(Mutex::new(settings)),
        })
    }
}

async fn load_settings(path: &Path) -> Option<NotificationSettings> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return None,
        Err(err) => {
            log::warn!("failed to read {}: {err}", path.display());
            return None;
        }
    };
    serde_json::from_str(&raw)
        .map_err(|err| log::warn!("malformed {}: {err}", path.display()))
        .ok()
}

#[async_trait]
impl NoteRepository for JsonFileRepository {
    async fn get_note(&self, key: &NoteKey) -> Result<Option<String>, StorageError> {
        Ok(self.notes.get(key).await)
    }

    async fn save_note(&self, key: &NoteKey, text: &str) -> Result<(), StorageError> {
        let key = key.clone();
        let text = text.to_string();
        self.notes
            .update(move |entries| {
                entries.insert(key, text);
            })
            .await
    }

    async fn list_notes(&self) -> Result<Vec<(NoteKey, String)>, StorageError> {
        Ok(self.notes.list().await)
    }
}

#[async_trait]
impl AssignmentRepository for JsonFileRepository {
    async fn get_submission(&self, key: &AssignmentKey) -> Result<Option<String>, StorageError> {
        Ok(self.submissions.get(key).await)
    }

    async fn submit(&self, key: &AssignmentKey, path: &str) -> Result<(), StorageError> {
        let key = key.clone();
        let path = path.to_string();
        self.submissions
            .update(move |entries| {
                entries.insert(key, path);
            })
            .await
    }

    async fn unsubmit(&self, key: &AssignmentKey) -> Result<bool, StorageError> {
        let key = key.clone();
        self.submissions
            .update(move |entries| entries.remove(&key).is_some())
            .await
    }

    async fn list_submissions(&self) -> Result<Vec<(AssignmentKey, String)>, StorageError> {
        Ok(self.submissions.list().await)
    }
}

#[async_trait]
impl SettingsRepository for JsonFileRepository {
    async fn get_settings(&self) -> Result<Option<NotificationSettings>, StorageError> {
        Ok(*self.settings.lock().await)
    }

    async fn save_settings(&self, settings: &NotificationSettings) -> Result<(), StorageError> {
        let mut current = self.settings.lock().await;
        *current = Some(*settings);
        let json = serde_json::to_string_pretty(settings)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        write_atomic(&self.settings_path, json.as_bytes())
            .await
            .inspect_err(|err| {
                log::warn!("could not persist {}: {err}", self.settings_path.display());
            })
    }
}

impl Storage {
    /// Build a `Storage` backed by JSON files in `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `JsonInitError` if the data directory cannot be created.
    pub async fn json(data_dir: &Path) -> Result<Self, JsonInitError> {
        let repo = JsonFileRepository::open(data_dir).await?;
        let notes: Arc<dyn NoteRepository> = Arc::new(repo.clone());
        let assignments: Arc<dyn AssignmentRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Ok(Self {
            notes,
            assignments,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonFileRepository>();
    }

    #[tokio::test]
    async fn failed_write_keeps_value_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::open(dir.path()).await.unwrap();
        // A directory where the snapshot should be makes the rename fail.
        std::fs::create_dir(dir.path().join(NOTES_FILE)).unwrap();

        let key = NoteKey::new("Pointers to Review", "Key Formula");
        let err = repo.save_note(&key, "a^2 + b^2").await.unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert_eq!(repo.get_note(&key).await.unwrap().as_deref(), Some("a^2 + b^2"));
        assert!(!dir.path().join("notes.json.tmp").exists());
    }
}
