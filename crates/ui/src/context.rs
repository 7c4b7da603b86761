use std::sync::Arc;

use services::{AssignmentService, AssistantService, Clock, NoteService, SettingsService};

use crate::platform::{FileOpenerRef, FilePickerRef};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;

    fn notes(&self) -> Arc<NoteService>;
    fn assignments(&self) -> Arc<AssignmentService>;
    fn settings(&self) -> Arc<SettingsService>;
    fn assistant(&self) -> Arc<AssistantService>;

    fn file_picker(&self) -> FilePickerRef;
    fn file_opener(&self) -> FileOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    notes: Arc<NoteService>,
    assignments: Arc<AssignmentService>,
    settings: Arc<SettingsService>,
    assistant: Arc<AssistantService>,
    file_picker: FilePickerRef,
    file_opener: FileOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            notes: app.notes(),
            assignments: app.assignments(),
            settings: app.settings(),
            assistant: app.assistant(),
            file_picker: app.file_picker(),
            file_opener: app.file_opener(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
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

    #[must_use]
    pub fn file_picker(&self) -> FilePickerRef {
        Arc::clone(&self.file_picker)
    }

    #[must_use]
    pub fn file_opener(&self) -> FileOpenerRef {
        Arc::clone(&self.file_opener)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
