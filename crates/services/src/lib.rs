#![forbid(unsafe_code)]

pub mod app_services;
pub mod assignment_service;
pub mod assistant_service;
pub mod error;
pub mod note_service;
pub mod settings_service;

pub use portal_core::Clock;
pub use storage::repository::StorageError;
pub use tokio_util::sync::CancellationToken;

pub use app_services::AppServices;
pub use assignment_service::{AssignmentService, SubmissionControls};
pub use assistant_service::{AssistantAction, AssistantConfig, AssistantService};
pub use error::{
    AppServicesError, AssignmentServiceError, AssistantError, NoteServiceError,
    SettingsServiceError,
};
pub use note_service::NoteService;
pub use settings_service::SettingsService;
