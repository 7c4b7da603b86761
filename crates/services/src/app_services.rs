use std::path::Path;
use std::sync::Arc;

use storage::repository::Storage;

use crate::assignment_service::AssignmentService;
use crate::assistant_service::AssistantService;
use crate::error::AppServicesError;
use crate::note_service::NoteService;
use crate::settings_service::SettingsService;

/// Assembles the app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    notes: Arc<NoteService>,
    assignments: Arc<AssignmentService>,
    settings: Arc<SettingsService>,
    assistant: Arc<AssistantService>,
}

impl AppServices {
    /// Build services backed by JSON files in `data_dir`, with the assistant
    /// configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the data directory cannot be prepared.
    pub async fn open(data_dir: &Path) -> Result<Self, AppServicesError> {
        let storage = Storage::json(data_dir).await?;
        Ok(Self::from_storage(&storage, AssistantService::from_env()))
    }

    /// In-memory services with the assistant disabled.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory(), AssistantService::disabled())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, assistant: AssistantService) -> Self {
        Self {
            notes: Arc::new(NoteService::new(Arc::clone(&storage.notes))),
            assignments: Arc::new(AssignmentService::new(Arc::clone(&storage.assignments))),
            settings: Arc::new(SettingsService::new(Arc::clone(&storage.settings))),
            assistant: Arc::new(assistant),
        }
    }

    #[must_use]
    pub fn notes(&self) -> Arc<NoteService> {
        Arc::clone(&self.notes)
    }

    #[must_use]
    pub fn assignments(&self) -> Arc<AssignmentService> {
        Arc::clone(&self.assignments)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }
}
