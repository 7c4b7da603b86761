use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portal_core::model::{AssignmentKey, NotificationSettings, NoteKey};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for private notes.
///
/// Implementations keep the in-memory value even when persisting fails, so a
/// `StorageError` from `save_note` means "not on disk", not "not saved".
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch the note text for a key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_note(&self, key: &NoteKey) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a note, then persist the full snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    async fn save_note(&self, key: &NoteKey, text: &str) -> Result<(), StorageError>;

    /// All notes ordered by key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_notes(&self) -> Result<Vec<(NoteKey, String)>, StorageError>;
}

/// Repository contract for assignment submissions (key → file path).
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_submission(&self, key: &AssignmentKey) -> Result<Option<String>, StorageError>;

    /// Record a submitted file path, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    async fn submit(&self, key: &AssignmentKey, path: &str) -> Result<(), StorageError>;

    /// Remove a submission. Returns whether an entry existed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be written.
    async fn unsubmit(&self, key: &AssignmentKey) -> Result<bool, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn list_submissions(&self) -> Result<Vec<(AssignmentKey, String)>, StorageError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_settings(&self) -> Result<Option<NotificationSettings>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the settings cannot be written.
    async fn save_settings(&self, settings: &NotificationSettings) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    notes: Arc<Mutex<BTreeMap<NoteKey, String>>>,
    submissions: Arc<Mutex<BTreeMap<AssignmentKey, String>>>,
    settings: Arc<Mutex<Option<NotificationSettings>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: &std::sync::PoisonError<T>) -> StorageError {
    StorageError::Connection(err.to_string())
}

#[async_trait]
impl NoteRepository for InMemoryRepository {
    async fn get_note(&self, key: &NoteKey) -> Result<Option<String>, StorageError> {
        let guard = self.notes.lock().map_err(|e| poisoned(&e))?;
        Ok(guard.get(key).cloned())
    }

    async fn save_note(&self, key: &NoteKey, text: &str) -> Result<(), StorageError> {
        let mut guard = self.notes.lock().map_err(|e| poisoned(&e))?;
        guard.insert(key.clone(), text.to_string());
        Ok(())
    }

    async fn list_notes(&self) -> Result<Vec<(NoteKey, String)>, StorageError> {
        let guard = self.notes.lock().map_err(|e| poisoned(&e))?;
        Ok(guard.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryRepository {
    async fn get_submission(&self, key: &AssignmentKey) -> Result<Option<String>, StorageError> {
        let guard = self.submissions.lock().map_err(|e| poisoned(&e))?;
        Ok(guard.get(key).cloned())
    }

    async fn submit(&self, key: &AssignmentKey, path: &str) -> Result<(), StorageError> {
        let mut guard = self.submissions.lock().map_err(|e| poisoned(&e))?;
        guard.insert(key.clone(), path.to_string());
        Ok(())
    }

    async fn unsubmit(&self, key: &AssignmentKey) -> Result<bool, StorageError> {
        let mut guard = self.submissions.lock().map_err(|e| poisoned(&e))?;
        Ok(guard.remove(key).is_some())
    }

    async fn list_submissions(&self) -> Result<Vec<(AssignmentKey, String)>, StorageError> {
        let guard = self.submissions.lock().map_err(|e| poisoned(&e))?;
        Ok(guard.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn get_settings(&self) -> Result<Option<NotificationSettings>, StorageError> {
        let guard = self.settings.lock().map_err(|e| poisoned(&e))?;
        Ok(*guard)
    }

    async fn save_settings(&self, settings: &NotificationSettings) -> Result<(), StorageError> {
        let mut guard = self.settings.lock().map_err(|e| poisoned(&e))?;
        *guard = Some(*settings);
        Ok(())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub notes: Arc<dyn NoteRepository>,
    pub assignments: Arc<dyn AssignmentRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let notes: Arc<dyn NoteRepository> = Arc::new(repo.clone());
        let assignments: Arc<dyn AssignmentRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Self {
            notes,
            assignments,
            settings,
        }
    }
}
