use std::sync::Arc;

use portal_core::model::NoteKey;
use storage::repository::NoteRepository;

use crate::error::NoteServiceError;

/// Private notes keyed by section and item.
#[derive(Clone)]
pub struct NoteService {
    notes: Arc<dyn NoteRepository>,
}

impl NoteService {
    #[must_use]
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    /// Stored text for `key`, or an empty string when nothing was written yet.
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::Storage` if repository access fails.
    pub async fn note(&self, key: &NoteKey) -> Result<String, NoteServiceError> {
        let text = self.notes.get_note(key).await?;
        Ok(text.unwrap_or_default())
    }

    /// Overwrite the note for `key` and persist every note.
    ///
    /// A storage error here still leaves the new text readable through
    /// [`NoteService::note`]; only the disk copy is stale.
    ///
    /// # Errors
    ///
    /// Returns `NoteServiceError::Storage` if the snapshot cannot be written.
    pub async fn save_note(&self, key: &NoteKey, text: &str) -> Result<(), NoteServiceError> {
        self.notes.save_note(key, text).await?;
        log::debug!("saved note {key} ({} bytes)", text.len());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `NoteServiceError::Storage` if repository access fails.
    pub async fn list_notes(&self) -> Result<Vec<(NoteKey, String)>, NoteServiceError> {
        let notes = self.notes.list_notes().await?;
        Ok(notes)
    }
}
